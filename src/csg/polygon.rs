use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};

use super::{Plane, Vertex};

static NEXT_TAG: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a polygon instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolygonTag(u64);

impl PolygonTag {
    fn next() -> Self {
        Self(NEXT_TAG.fetch_add(1, Ordering::Relaxed))
    }
}

/// Opaque material reference carried through CSG operations untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u64);

/// A convex planar polygon with caller-owned metadata.
///
/// `shared` and `material` are carried verbatim into every fragment the
/// polygon is split into. The plane is derived from the first three
/// vertices on construction and kept consistent by [`Polygon::flip`].
/// Vertices are read-only outside the crate.
#[derive(Debug)]
pub struct Polygon<S: Clone = ()> {
    pub(crate) vertices: Vec<Vertex>,
    pub shared: S,
    pub material: Option<MaterialId>,
    plane: Plane,
    tag: PolygonTag,
}

impl<S: Clone> Polygon<S> {
    /// Creates a polygon; vertices are expected counter-clockwise when
    /// viewed from the front.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` for fewer than 3 vertices and
    /// `GeometryError::Degenerate` if the first three are collinear.
    pub fn new(vertices: Vec<Vertex>, shared: S, material: Option<MaterialId>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()).into());
        }
        let plane = Plane::from_points(&vertices[0].pos, &vertices[1].pos, &vertices[2].pos)?;
        Ok(Self::with_plane(vertices, plane, shared, material))
    }

    /// Creates a polygon from bare positions, with no material.
    ///
    /// # Errors
    ///
    /// Same as [`Polygon::new`].
    pub fn from_points(points: &[Point3], shared: S) -> Result<Self> {
        Self::new(points.iter().copied().map(Vertex::from).collect(), shared, None)
    }

    /// Creates a polygon on a known plane without re-deriving it.
    ///
    /// Used for split fragments, whose vertices lie on the parent's plane
    /// but may be too close together to re-derive it reliably.
    pub(crate) fn with_plane(
        vertices: Vec<Vertex>,
        plane: Plane,
        shared: S,
        material: Option<MaterialId>,
    ) -> Self {
        Self {
            vertices,
            shared,
            material,
            plane,
            tag: PolygonTag::next(),
        }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    #[must_use]
    pub fn tag(&self) -> PolygonTag {
        self.tag
    }

    /// Reverses the winding in place: vertex order, vertex normals and plane.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.flip();
        }
        self.plane.flip();
    }

    /// Area of the polygon (fan triangulation projected on its normal).
    #[must_use]
    pub fn area(&self) -> f64 {
        let Some((first, rest)) = self.vertices.split_first() else {
            return 0.0;
        };
        let mut sum = Vector3::zeros();
        for pair in rest.windows(2) {
            sum += (pair[0].pos - first.pos).cross(&(pair[1].pos - first.pos));
        }
        0.5 * sum.dot(&self.plane.normal).abs()
    }

    /// Average of the vertex positions.
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        #[allow(clippy::cast_precision_loss)]
        let n = self.vertices.len().max(1) as f64;
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, v| acc + v.pos.coords);
        Point3::from(sum / n)
    }
}

/// Cloning deep-copies the vertices, shares the metadata by `Clone`, and
/// issues a fresh tag.
impl<S: Clone> Clone for Polygon<S> {
    fn clone(&self) -> Self {
        Self::with_plane(
            self.vertices.clone(),
            self.plane,
            self.shared.clone(),
            self.material,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Polygon<&'static str> {
        Polygon::from_points(
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            "floor",
        )
        .unwrap()
    }

    #[test]
    fn plane_comes_from_leading_vertices() {
        let sq = unit_square();
        assert_relative_eq!(sq.plane().normal, Vector3::z());
        assert_relative_eq!(sq.plane().w, 0.0);
        assert_relative_eq!(sq.area(), 1.0);
        assert_relative_eq!(sq.centroid(), Point3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn too_few_or_collinear_vertices_fail() {
        let two = Polygon::from_points(&[Point3::origin(), Point3::new(1.0, 0.0, 0.0)], ());
        assert!(two.is_err());
        let line = Polygon::from_points(
            &[
                Point3::origin(),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
            ],
            (),
        );
        assert!(line.is_err());
    }

    #[test]
    fn flip_twice_restores_polygon() {
        let original = unit_square();
        let mut p = original.clone();
        p.flip();
        assert_relative_eq!(p.plane().normal, -Vector3::z());
        assert_eq!(p.vertices[0].pos, Point3::new(0.0, 1.0, 0.0));
        p.flip();
        for (a, b) in p.vertices.iter().zip(&original.vertices) {
            assert_eq!(a.pos, b.pos);
        }
        assert_eq!(p.plane(), original.plane());
    }

    #[test]
    fn clone_is_deep_with_new_tag() {
        let original = unit_square();
        let mut copy = original.clone();
        copy.vertices[0].pos.x = 42.0;
        assert_eq!(original.vertices[0].pos.x, 0.0);
        assert_eq!(copy.shared, "floor");
        assert_ne!(copy.tag(), original.tag());
    }

    #[test]
    fn vertices_stay_on_plane_through_flip() {
        let mut sq = unit_square();
        sq.flip();
        let verts = sq.vertices();
        assert_eq!(verts.len(), 4);
        for v in verts {
            assert_eq!(sq.plane().side_of(&v.pos), crate::csg::Side::Coplanar);
        }
        let winding = (verts[1].pos - verts[0].pos).cross(&(verts[2].pos - verts[0].pos));
        assert!(winding.dot(&sq.plane().normal) > 0.0);
    }
}
