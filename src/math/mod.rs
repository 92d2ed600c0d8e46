pub mod arc_2d;
pub mod distance_2d;
pub mod polygon_2d;

use crate::error::{GeometryError, Result};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Rigid 2D placement (rotation + translation) of a plan outline.
pub type Isometry2 = nalgebra::Isometry2<f64>;

/// Global geometric tolerance for length and area comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `v` scaled to unit length.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `v` is shorter than [`TOLERANCE`].
/// The zero vector has no direction, so no finite result is produced.
pub fn unit(v: &Vector3) -> Result<Vector3> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

/// 2D cross product `a.x * b.y - a.y * b.x`.
#[inline]
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn unit_has_length_one() {
        let u = unit(&Vector3::new(3.0, 0.0, 4.0)).unwrap();
        assert!((u.norm() - 1.0).abs() < TOLERANCE);
        assert!((u.x - 0.6).abs() < TOLERANCE);
    }

    #[test]
    fn unit_of_zero_is_error() {
        assert!(unit(&Vector3::zeros()).is_err());
    }

    #[test]
    fn cross_2d_sign() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        assert!(cross_2d(&x, &y) > 0.0);
        assert!(cross_2d(&y, &x) < 0.0);
    }
}
