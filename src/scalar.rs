use core::f64::consts::PI;

/// Restricts `value` to `[min, max]`.
///
/// Unlike `f64::clamp` this never panics. With inverted bounds
/// (`min > max`) a value below `min` becomes `min` and anything else above
/// `max` becomes `max`. NaN passes through unchanged.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation. `amount` is not clamped, values outside `[0, 1]`
/// extrapolate past the endpoints.
#[inline]
pub fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * end
}

#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn clamp_inside_and_outside() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(42.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(0.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(10.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn clamp_is_idempotent() {
        for &(v, lo, hi) in &[(-7.5, -1.0, 1.0), (0.25, -1.0, 1.0), (9.0, 2.0, 3.0), (2.5, 2.0, 3.0)] {
            let once = clamp(v, lo, hi);
            assert_eq!(clamp(once, lo, hi), once);
        }
    }

    #[test]
    fn clamp_inverted_bounds() {
        // min > max: below min wins first, otherwise above max
        assert_eq!(clamp(0.0, 5.0, 1.0), 5.0);
        assert_eq!(clamp(3.0, 5.0, 1.0), 5.0);
        assert_eq!(clamp(7.0, 5.0, 1.0), 1.0);
    }

    #[test]
    fn clamp_nan_passes_through() {
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        for &(a, b) in &[(0.0, 1.0), (-3.25, 8.5), (1e10, -1e-3), (0.1, 0.2)] {
            assert_eq!(lerp(a, b, 0.0), a);
            assert_eq!(lerp(a, b, 1.0), b);
        }
    }

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
        assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
    }

    #[test]
    fn degrees_and_radians() {
        assert_relative_eq!(deg_to_rad(180.0), PI);
        assert_relative_eq!(deg_to_rad(90.0), 1.5707963267948966);
        assert_eq!(deg_to_rad(0.0), 0.0);
        assert_relative_eq!(rad_to_deg(deg_to_rad(37.0)), 37.0, epsilon = 1e-12);
    }
}
