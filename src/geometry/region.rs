use crate::math::polygon_2d::{ensure_ccw, ensure_cw, signed_area, Aabb2};
use crate::math::Point2;

use super::Pline;

/// A planar region: one outer loop plus zero or more hole loops.
///
/// The outer loop is stored counter-clockwise and holes clockwise, so the
/// region is well-formed under both even-odd and non-zero fill rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region2 {
    pub outer: Vec<Point2>,
    pub holes: Vec<Vec<Point2>>,
}

impl Region2 {
    /// Creates a region, normalising loop orientation.
    #[must_use]
    pub fn new(outer: &[Point2], holes: &[Vec<Point2>]) -> Self {
        Self {
            outer: ensure_ccw(outer),
            holes: holes
                .iter()
                .filter(|h| h.len() >= 3)
                .map(|h| ensure_cw(h))
                .collect(),
        }
    }

    /// Tessellates plines into a region.
    #[must_use]
    pub fn from_plines(outer: &Pline, holes: &[Pline], tolerance: f64) -> Self {
        let holes: Vec<Vec<Point2>> = holes.iter().map(|h| h.to_points(tolerance)).collect();
        Self::new(&outer.to_points(tolerance), &holes)
    }

    /// Outer loop followed by the holes.
    pub fn loops(&self) -> impl Iterator<Item = &Vec<Point2>> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    /// Loops as owned point lists, in [`Self::loops`] order.
    #[must_use]
    pub fn to_paths(&self) -> Vec<Vec<Point2>> {
        self.loops().cloned().collect()
    }

    /// Enclosed area (outer minus holes).
    #[must_use]
    pub fn area(&self) -> f64 {
        self.loops().map(|l| signed_area(l)).sum::<f64>().abs()
    }

    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb2> {
        Aabb2::from_points(&self.outer)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outer.len() < 3
    }
}
