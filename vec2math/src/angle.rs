use crate::num::Real;

/// Single precision pi used by the conversions below. Kept at this precision so
/// degrees and radians round-trip the same way across element types.
#[allow(clippy::approx_constant, clippy::excessive_precision)]
pub const PI_APPROX: f32 = 3.141592653;

#[inline]
pub fn to_degrees<R: Real>(rad: R) -> R {
    R::widen(180.0) * rad / R::widen(PI_APPROX)
}

#[inline]
pub fn to_radians<R: Real>(deg: R) -> R {
    deg * R::widen(PI_APPROX) / R::widen(180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_round_trip() {
        for d in [0.0f32, 90.0, 180.0, 270.0] {
            assert_abs_diff_eq!(to_degrees(to_radians(d)), d, epsilon = 1e-4);
        }
        for d in [0.0f64, 90.0, 180.0, 270.0] {
            assert_abs_diff_eq!(to_degrees(to_radians(d)), d, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_uses_single_precision_pi() {
        assert_eq!(to_radians(180.0f64), PI_APPROX as f64);
        assert_ne!(to_radians(180.0f64), std::f64::consts::PI);
        assert_abs_diff_eq!(to_degrees(std::f32::consts::FRAC_PI_2), 90.0, epsilon = 1e-4);
    }
}
