use crate::math::{Point3, Vector3};

use super::{Node, Plane, Polygon, Vertex};

/// A closed solid represented by its boundary polygons.
#[derive(Debug, Clone)]
pub struct Csg<S: Clone = ()> {
    pub polygons: Vec<Polygon<S>>,
}

impl<S: Clone> Csg<S> {
    #[must_use]
    pub fn from_polygons(polygons: Vec<Polygon<S>>) -> Self {
        Self { polygons }
    }

    /// Axis-aligned box centred on `center` with half-extents `radius`.
    ///
    /// Every face carries `shared` and outward-facing vertex normals.
    #[must_use]
    pub fn cube(center: Point3, radius: Vector3, shared: S) -> Self {
        // (corner bit patterns, outward normal) per face, counter-clockwise
        // when seen from outside.
        const FACES: [([u8; 4], [f64; 3]); 6] = [
            ([0, 4, 6, 2], [-1.0, 0.0, 0.0]),
            ([1, 3, 7, 5], [1.0, 0.0, 0.0]),
            ([0, 1, 5, 4], [0.0, -1.0, 0.0]),
            ([2, 6, 7, 3], [0.0, 1.0, 0.0]),
            ([0, 2, 3, 1], [0.0, 0.0, -1.0]),
            ([4, 5, 7, 6], [0.0, 0.0, 1.0]),
        ];

        let corner = |bits: u8| {
            let sign = |bit: u8| if bits & bit == 0 { -1.0 } else { 1.0 };
            Point3::new(
                center.x + radius.x * sign(1),
                center.y + radius.y * sign(2),
                center.z + radius.z * sign(4),
            )
        };

        let polygons = FACES
            .iter()
            .map(|(corners, n)| {
                let normal = Vector3::new(n[0], n[1], n[2]);
                let plane = Plane {
                    normal,
                    w: normal.dot(&(center.coords + radius.component_mul(&normal))),
                };
                let vertices = corners
                    .iter()
                    .map(|&c| Vertex::with_normal(corner(c), normal))
                    .collect();
                Polygon::with_plane(vertices, plane, shared.clone(), None)
            })
            .collect();
        Self { polygons }
    }

    /// Solid occupying space in `self` or `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut a = Node::new(self.polygons.clone());
        let mut b = Node::new(other.polygons.clone());
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(b.all_polygons());
        Self::from_polygons(a.all_polygons())
    }

    /// Solid occupying space in `self` but not in `other`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        let mut a = Node::new(self.polygons.clone());
        let mut b = Node::new(other.polygons.clone());
        a.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(b.all_polygons());
        a.invert();
        Self::from_polygons(a.all_polygons())
    }

    /// Solid occupying space in both `self` and `other`.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let mut a = Node::new(self.polygons.clone());
        let mut b = Node::new(other.polygons.clone());
        a.invert();
        b.clip_to(&a);
        b.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        a.build(b.all_polygons());
        a.invert();
        Self::from_polygons(a.all_polygons())
    }

    /// Solid with inside and outside swapped.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut polygons = self.polygons.clone();
        for polygon in &mut polygons {
            polygon.flip();
        }
        Self { polygons }
    }

    /// Enclosed volume (divergence theorem over the boundary polygons).
    #[must_use]
    pub fn volume(&self) -> f64 {
        let mut six_v = 0.0;
        for polygon in &self.polygons {
            let Some((first, rest)) = polygon.vertices.split_first() else {
                continue;
            };
            for pair in rest.windows(2) {
                six_v += first.pos.coords.dot(&pair[0].pos.coords.cross(&pair[1].pos.coords));
            }
        }
        six_v / 6.0
    }
}
