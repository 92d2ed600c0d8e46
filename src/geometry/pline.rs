use crate::math::arc_2d::Arc2;
use crate::math::{Isometry2, Point2};

/// Bulge-encoded polyline vertex for mixed line/arc segments.
///
/// `bulge = tan(sweep_angle / 4)`:
/// - `0` = straight line to next vertex
/// - `> 0` = counter-clockwise arc to next vertex
/// - `< 0` = clockwise arc to next vertex
/// - `|bulge| = 1` = semicircle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlineVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl PlineVertex {
    /// Creates a new vertex with the given coordinates and bulge.
    #[must_use]
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        Self { x, y, bulge }
    }

    /// Creates a line vertex (bulge = 0).
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self { x, y, bulge: 0.0 }
    }

    #[must_use]
    pub fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// A polyline with mixed straight-line and circular-arc segments.
///
/// Room outlines, wall loops and face boundaries are all closed plines.
/// For closed polylines, the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Pline {
    pub vertices: Vec<PlineVertex>,
    pub closed: bool,
}

impl Pline {
    /// Creates a `Pline` from points with all-zero bulges (line segments only).
    #[must_use]
    pub fn from_points(points: &[Point2], closed: bool) -> Self {
        let vertices = points.iter().map(|p| PlineVertex::line(p.x, p.y)).collect();
        Self { vertices, closed }
    }

    /// Shorthand for a closed, straight-edged loop through `(x, y)` pairs.
    #[must_use]
    pub fn closed_polygon(coords: &[(f64, f64)]) -> Self {
        let vertices = coords.iter().map(|&(x, y)| PlineVertex::line(x, y)).collect();
        Self {
            vertices,
            closed: true,
        }
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.vertices.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Start point of every segment, in order.
    #[must_use]
    pub fn segment_starts(&self) -> Vec<Point2> {
        self.vertices
            .iter()
            .take(self.segment_count())
            .map(PlineVertex::point)
            .collect()
    }

    /// Converts this polyline to points by tessellating arcs into chords.
    ///
    /// `tolerance` bounds the deviation between an arc and its chords. A closed
    /// pline yields its loop without repeating the first point at the end.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let n = self.vertices.len();
        if n == 0 {
            return Vec::new();
        }

        let mut points = Vec::with_capacity(n * 2);
        points.push(self.vertices[0].point());

        for i in 0..self.segment_count() {
            let v0 = &self.vertices[i];
            let v1 = &self.vertices[(i + 1) % n];
            let end = v1.point();

            if let Some(arc) = Arc2::from_bulge(&v0.point(), &end, v0.bulge) {
                let n_sub = arc.subdivision_count(tolerance);
                for j in 1..n_sub {
                    points.push(arc.point_at(f64::from(j) / f64::from(n_sub)));
                }
            }
            points.push(end);
        }

        if self.closed && points.len() > 1 {
            points.pop();
        }
        points
    }

    /// Returns a copy with every vertex moved by `placement`.
    ///
    /// Bulges are invariant under rigid motions.
    #[must_use]
    pub fn transformed(&self, placement: &Isometry2) -> Self {
        let vertices = self
            .vertices
            .iter()
            .map(|v| {
                let p = placement * v.point();
                PlineVertex::new(p.x, p.y, v.bulge)
            })
            .collect();
        Self {
            vertices,
            closed: self.closed,
        }
    }
}
