//! Math utilities and types
//!
//! Vector aliases used for mesh geometry and texture coordinates.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type (texture coordinates, pen positions)
pub type Vec2 = Vector2<f32>;

/// 3D vector type (vertex positions)
pub type Vec3 = Vector3<f32>;

/// Returns true if `value` is a finite number greater than or equal to zero
pub(crate) fn is_finite_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_non_negative() {
        assert!(is_finite_non_negative(0.0));
        assert!(is_finite_non_negative(12.5));
        assert!(!is_finite_non_negative(-0.5));
        assert!(!is_finite_non_negative(f32::NAN));
        assert!(!is_finite_non_negative(f32::INFINITY));
    }
}
