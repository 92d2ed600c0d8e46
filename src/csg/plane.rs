use crate::error::{GeometryError, Result};
use crate::math::{unit, Point3, Vector3};

use super::EPSILON;

/// Side of a plane a point lies on, within [`EPSILON`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Coplanar,
    Front,
    Back,
}

impl Side {
    /// Bit used when folding vertex sides into a polygon classification.
    pub(crate) fn bits(self) -> u8 {
        match self {
            Side::Coplanar => 0,
            Side::Front => 1,
            Side::Back => 2,
        }
    }
}

/// An oriented plane `normal · p = w`.
///
/// `normal` is unit length; `w` is the signed offset of the plane from the
/// origin along it. Points with `normal · p > w` are in front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vector3,
    pub w: f64,
}

impl Plane {
    /// Creates the plane `normal · p = w`.
    ///
    /// `normal` need not be unit length; both it and `w` are scaled by
    /// `1 / |normal|`, so the described plane is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if `normal` has zero length.
    pub fn new(normal: Vector3, w: f64) -> Result<Self> {
        let unit_normal = unit(&normal)?;
        Ok(Self {
            normal: unit_normal,
            w: w / normal.norm(),
        })
    }

    /// Plane through three points; the normal follows the right-hand rule
    /// on `a → b → c`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` when the points are collinear or
    /// coincident. No fallback plane is produced.
    pub fn from_points(a: &Point3, b: &Point3, c: &Point3) -> Result<Self> {
        let normal = unit(&(b - a).cross(&(c - a))).map_err(|_| {
            GeometryError::Degenerate(format!(
                "plane through collinear points ({}, {}, {}), ({}, {}, {}), ({}, {}, {})",
                a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z
            ))
        })?;
        Ok(Self {
            normal,
            w: normal.dot(&a.coords),
        })
    }

    /// Signed distance of `p` from the plane.
    #[inline]
    #[must_use]
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        self.normal.dot(&p.coords) - self.w
    }

    /// Classifies `p` against the plane: coplanar only when
    /// `|d| < EPSILON`.
    #[must_use]
    pub fn side_of(&self, p: &Point3) -> Side {
        let d = self.signed_distance(p);
        if d <= -EPSILON {
            Side::Back
        } else if d >= EPSILON {
            Side::Front
        } else {
            Side::Coplanar
        }
    }

    /// Reverses the orientation in place.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Returns the plane with opposite orientation.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            w: -self.w,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn from_points_contains_all_three() {
        let (a, b, c) = (p(1.0, 2.0, 3.0), p(4.0, -1.0, 0.5), p(-2.0, 0.0, 7.0));
        let plane = Plane::from_points(&a, &b, &c).unwrap();
        for q in [a, b, c] {
            assert!(plane.signed_distance(&q).abs() < EPSILON);
        }
        assert!((plane.normal.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn from_points_ccw_in_xy_faces_up() {
        let plane = Plane::from_points(&p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0), &p(0.0, 1.0, 0.0)).unwrap();
        assert!((plane.normal.z - 1.0).abs() < 1e-12);
        assert!(plane.w.abs() < 1e-12);
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let result = Plane::from_points(&p(0.0, 0.0, 0.0), &p(1.0, 1.0, 1.0), &p(2.0, 2.0, 2.0));
        assert!(matches!(
            result,
            Err(crate::ArchError::Geometry(GeometryError::Degenerate(_)))
        ));
        assert!(Plane::new(Vector3::zeros(), 1.0).is_err());
    }

    #[test]
    fn classification_honours_epsilon() {
        let plane = Plane::new(Vector3::z(), 0.0).unwrap();
        assert_eq!(plane.side_of(&p(0.0, 0.0, 1.0)), Side::Front);
        assert_eq!(plane.side_of(&p(0.0, 0.0, -1.0)), Side::Back);
        assert_eq!(plane.side_of(&p(5.0, 5.0, EPSILON * 0.5)), Side::Coplanar);
        assert_eq!(plane.side_of(&p(5.0, 5.0, -EPSILON * 0.5)), Side::Coplanar);
        assert_eq!(plane.side_of(&p(0.0, 0.0, EPSILON)), Side::Front);
        assert_eq!(plane.side_of(&p(0.0, 0.0, -EPSILON)), Side::Back);
    }

    #[test]
    fn new_rescales_offset_with_normal() {
        let plane = Plane::new(Vector3::new(2.0, 0.0, 0.0), 1.0).unwrap();
        assert!((plane.w - 0.5).abs() < 1e-12);
        assert_eq!(plane.side_of(&p(0.5, 3.0, -1.0)), Side::Coplanar);
        assert_eq!(plane.side_of(&p(0.9, 0.0, 0.0)), Side::Front);
    }

    #[test]
    fn flip_negates_normal_and_offset() {
        let mut plane = Plane::new(Vector3::x(), 0.5).unwrap();
        plane.flip();
        assert_eq!(plane.normal, -Vector3::x());
        assert!((plane.w + 0.5).abs() < 1e-12);
        assert_eq!(plane.flipped().normal, Vector3::x());
    }
}
