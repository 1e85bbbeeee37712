//! 2D vector primitives with zero-magnitude guarding

use crate::core::GEOMETRY_EPSILON;
use nalgebra::Vector2;

/// Euclidean length of a 2D vector
#[inline]
pub fn magnitude(v: &Vector2<f64>) -> f64 {
    v.norm()
}

#[inline]
pub fn dot(v1: &Vector2<f64>, v2: &Vector2<f64>) -> f64 {
    v1.dot(v2)
}

/// Whether the vector is too short to define a direction
#[inline]
pub fn is_degenerate(v: &Vector2<f64>) -> bool {
    magnitude(v) < GEOMETRY_EPSILON
}

/// Cosine of the angle between two vectors, clamped to [-1, 1].
///
/// Returns `None` when either vector has no defined direction; callers
/// route that case to their degenerate-geometry fallback.
pub fn cosine_between(v1: &Vector2<f64>, v2: &Vector2<f64>) -> Option<f64> {
    if is_degenerate(v1) || is_degenerate(v2) {
        return None;
    }
    Some((dot(v1, v2) / (magnitude(v1) * magnitude(v2))).clamp(-1.0, 1.0))
}

/// Sine of the angle between two vectors, from the clamped cosine
pub fn sine_between(v1: &Vector2<f64>, v2: &Vector2<f64>) -> Option<f64> {
    cosine_between(v1, v2).map(|cos| (1.0 - cos * cos).max(0.0).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_magnitude_and_dot() {
        let v1 = Vector2::new(3.0, 4.0);
        let v2 = Vector2::new(-4.0, 3.0);
        assert_relative_eq!(magnitude(&v1), 5.0);
        assert_relative_eq!(dot(&v1, &v2), 0.0);
        assert_relative_eq!(dot(&v1, &v1), 25.0);
    }

    #[test]
    fn test_cosine_is_clamped() {
        // Nearly parallel vectors whose raw ratio can overshoot 1
        let v1 = Vector2::new(0.1, 0.3);
        let v2 = Vector2::new(0.1 * 7.0, 0.3 * 7.0);
        let cos = cosine_between(&v1, &v2).unwrap();
        assert!(cos <= 1.0 && cos >= -1.0);
        assert_relative_eq!(cos, 1.0, epsilon = 1e-12);

        let sin = sine_between(&v1, &v2).unwrap();
        assert!(sin.is_finite());
        assert!(sin >= 0.0);
    }

    #[test]
    fn test_zero_vector_has_no_direction() {
        let zero = Vector2::new(0.0, 0.0);
        let v = Vector2::new(1.0, 0.0);
        assert!(is_degenerate(&zero));
        assert!(is_degenerate(&Vector2::new(1e-13, 0.0)));
        assert!(!is_degenerate(&v));
        assert_eq!(cosine_between(&zero, &v), None);
        assert_eq!(cosine_between(&Vector2::new(0.0, 1e-13), &v), None);
        assert_eq!(sine_between(&v, &zero), None);
    }

    #[test]
    fn test_right_angle() {
        let sin = sine_between(&Vector2::new(2.0, 0.0), &Vector2::new(0.0, 5.0)).unwrap();
        assert_relative_eq!(sin, 1.0);
    }
}
