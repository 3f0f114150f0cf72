pub mod point;
pub mod scalar;
pub mod vec;

pub use point::Point2D;
pub use scalar::{clamp, deg_to_rad, lerp, rad_to_deg};
pub use vec::{PartialVector2, Vector2, VectorError};

#[cfg(test)]
mod tests {

    #[test]
    fn test() {
        use crate::vec::Vector2;
        use approx::assert_relative_eq;

        let mut pos = Vector2::new(10.0, 2.0);
        let target = Vector2::new(13.0, 6.0);

        let next = *Vector2::move_toward(&pos, &target, 2.5);
        pos.set_from(next);
        assert_relative_eq!(pos.distance(target), 2.5, epsilon = 1e-12);

        let mut heading = target;
        pos.get_normal(&mut heading);
        assert_relative_eq!(heading.magnitude(), 1.0, epsilon = 1e-12);

        heading.rotate(90.0).mul_scalar(3.0).clamp(-2.0, 2.0);

        println!("{:.2} {}", pos, heading);
    }
}
