#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Plain `{x, y}` record handed to and received from drawing code.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point2D> for (f64, f64) {
    fn from(p: Point2D) -> Self {
        (p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_round_trip() {
        let p = Point2D::from((3.0, -1.0));
        assert_eq!(p, Point2D::new(3.0, -1.0));
        assert_eq!(<(f64, f64)>::from(p), (3.0, -1.0));
        assert_eq!(Point2D::default(), Point2D::new(0.0, 0.0));
    }
}
