use super::plane::Side;
use super::{Plane, Polygon, Vertex};

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = 3;

/// Where a polygon lies relative to a splitting plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonPlacement {
    /// Every vertex is within epsilon of the plane.
    Coplanar,
    /// No vertex is behind the plane.
    Front,
    /// No vertex is in front of the plane.
    Back,
    /// Vertices lie strictly on both sides.
    Spanning,
}

/// Output buckets of [`Plane::split_polygon`].
#[derive(Debug)]
pub struct SplitPolygons<S: Clone = ()> {
    pub coplanar_front: Vec<Polygon<S>>,
    pub coplanar_back: Vec<Polygon<S>>,
    pub front: Vec<Polygon<S>>,
    pub back: Vec<Polygon<S>>,
}

impl<S: Clone> Default for SplitPolygons<S> {
    fn default() -> Self {
        Self {
            coplanar_front: Vec::new(),
            coplanar_back: Vec::new(),
            front: Vec::new(),
            back: Vec::new(),
        }
    }
}

impl<S: Clone> SplitPolygons<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of polygons across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coplanar_front.len() + self.coplanar_back.len() + self.front.len() + self.back.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Plane {
    /// Classifies a polygon without splitting it.
    #[must_use]
    pub fn placement_of<S: Clone>(&self, polygon: &Polygon<S>) -> PolygonPlacement {
        let bits = polygon
            .vertices
            .iter()
            .fold(COPLANAR, |acc, v| acc | self.side_of(&v.pos).bits());
        match bits {
            COPLANAR => PolygonPlacement::Coplanar,
            FRONT => PolygonPlacement::Front,
            BACK => PolygonPlacement::Back,
            _ => PolygonPlacement::Spanning,
        }
    }

    /// Splits `polygon` by this plane into `out`.
    ///
    /// A polygon entirely within epsilon of the plane goes to
    /// `coplanar_front` when its own normal agrees with this plane's, else
    /// to `coplanar_back`. A polygon on one side (coplanar vertices allowed)
    /// is moved unchanged into `front` or `back`. A spanning polygon is cut:
    /// coplanar vertices go to both halves, and each crossing edge
    /// contributes one interpolated vertex shared bit-for-bit by both
    /// halves. Halves with fewer than 3 vertices are dropped.
    pub fn split_polygon<S: Clone>(&self, polygon: Polygon<S>, out: &mut SplitPolygons<S>) {
        let sides: Vec<Side> = polygon.vertices.iter().map(|v| self.side_of(&v.pos)).collect();
        let bits = sides.iter().fold(COPLANAR, |acc, s| acc | s.bits());

        match bits {
            COPLANAR => {
                if self.normal.dot(&polygon.plane().normal) > 0.0 {
                    out.coplanar_front.push(polygon);
                } else {
                    out.coplanar_back.push(polygon);
                }
            }
            FRONT => out.front.push(polygon),
            BACK => out.back.push(polygon),
            _ => {
                debug_assert_eq!(bits, SPANNING);
                self.split_spanning(&polygon, &sides, out);
            }
        }
    }

    fn split_spanning<S: Clone>(&self, polygon: &Polygon<S>, sides: &[Side], out: &mut SplitPolygons<S>) {
        let n = polygon.vertices.len();
        let mut front: Vec<Vertex> = Vec::with_capacity(n + 1);
        let mut back: Vec<Vertex> = Vec::with_capacity(n + 1);

        for i in 0..n {
            let j = (i + 1) % n;
            let (si, sj) = (sides[i], sides[j]);
            let vi = &polygon.vertices[i];
            let vj = &polygon.vertices[j];

            if si != Side::Back {
                front.push(*vi);
            }
            if si != Side::Front {
                back.push(*vi);
            }

            if (si.bits() | sj.bits()) == SPANNING {
                let di = self.signed_distance(&vi.pos);
                let dj = self.signed_distance(&vj.pos);
                let crossing = vi.interpolate(vj, di / (di - dj));
                front.push(crossing);
                back.push(crossing);
            }
        }

        let plane = *polygon.plane();
        if front.len() >= 3 {
            out.front.push(Polygon::with_plane(
                front,
                plane,
                polygon.shared.clone(),
                polygon.material,
            ));
        }
        if back.len() >= 3 {
            out.back.push(Polygon::with_plane(
                back,
                plane,
                polygon.shared.clone(),
                polygon.material,
            ));
        }
    }
}
