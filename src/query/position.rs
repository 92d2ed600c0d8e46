use crate::geometry::Region2;
use crate::math::distance_2d::point_to_loop_dist;
use crate::math::{cross_2d, Point2, TOLERANCE};

/// Position of a point relative to a loop or region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PtLoopPosition {
    In,
    On,
    Out,
}

impl PtLoopPosition {
    /// `true` for `In` and `On`; boundary contact counts as inside.
    #[must_use]
    pub fn is_inside_or_on(self) -> bool {
        self != PtLoopPosition::Out
    }
}

/// Point classification against plan loops with a boundary tolerance.
#[derive(Debug, Clone, Copy)]
pub struct PositionJudge {
    tolerance: f64,
}

impl Default for PositionJudge {
    fn default() -> Self {
        Self::new(TOLERANCE)
    }
}

impl PositionJudge {
    /// `tolerance` is the distance within which a point counts as on a loop.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Classifies `pt` against a single closed loop of either winding.
    #[must_use]
    pub fn pt_to_loop(&self, pt: &Point2, points: &[Point2]) -> PtLoopPosition {
        if points.len() < 3 {
            return PtLoopPosition::Out;
        }
        if point_to_loop_dist(pt, points) <= self.tolerance {
            return PtLoopPosition::On;
        }
        if winding_number(pt, points) == 0 {
            PtLoopPosition::Out
        } else {
            PtLoopPosition::In
        }
    }

    /// Classifies `pt` against a region with holes.
    ///
    /// A point on a hole boundary is `On`; a point strictly inside a hole
    /// is `Out`.
    #[must_use]
    pub fn pt_to_polygon(&self, pt: &Point2, region: &Region2) -> PtLoopPosition {
        match self.pt_to_loop(pt, &region.outer) {
            PtLoopPosition::In => {}
            other => return other,
        }
        for hole in &region.holes {
            match self.pt_to_loop(pt, hole) {
                PtLoopPosition::Out => {}
                PtLoopPosition::On => return PtLoopPosition::On,
                PtLoopPosition::In => return PtLoopPosition::Out,
            }
        }
        PtLoopPosition::In
    }
}

/// Winding number of `pt` with respect to the loop. Non-zero => inside.
fn winding_number(pt: &Point2, points: &[Point2]) -> i32 {
    let n = points.len();
    let mut winding = 0i32;
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        let side = cross_2d(&(b - a), &(pt - a));

        if a.y <= pt.y {
            if b.y > pt.y && side > 0.0 {
                winding += 1;
            }
        } else if b.y <= pt.y && side < 0.0 {
            winding -= 1;
        }
    }
    winding
}
