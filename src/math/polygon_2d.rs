use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed loop (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the loop with counter-clockwise winding.
#[must_use]
pub fn ensure_ccw(points: &[Point2]) -> Vec<Point2> {
    if signed_area(points) < 0.0 {
        points.iter().rev().copied().collect()
    } else {
        points.to_vec()
    }
}

/// Returns the loop with clockwise winding.
#[must_use]
pub fn ensure_cw(points: &[Point2]) -> Vec<Point2> {
    if signed_area(points) > 0.0 {
        points.iter().rev().copied().collect()
    } else {
        points.to_vec()
    }
}

/// An axis-aligned bounding rectangle in the plan view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Aabb2 {
    /// Bounding box of a point set, or `None` if it is empty.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bb = Self {
            min: *first,
            max: *first,
        };
        for p in rest {
            bb.include(p);
        }
        Some(bb)
    }

    /// Bounding box over every point of every loop, or `None` if all loops
    /// are empty.
    #[must_use]
    pub fn from_loops<L: AsRef<[Point2]>>(loops: &[L]) -> Option<Self> {
        let mut result: Option<Self> = None;
        for l in loops {
            let Some(bb) = Self::from_points(l.as_ref()) else {
                continue;
            };
            result = Some(match result {
                Some(acc) => acc.union(&bb),
                None => bb,
            });
        }
        result
    }

    /// Grows the box to contain `p`.
    pub fn include(&mut self, p: &Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut bb = *self;
        bb.include(&other.min);
        bb.include(&other.max);
        bb
    }

    /// `true` if the boxes share any point, touching edges included.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x + TOLERANCE
            && self.max.x >= other.min.x - TOLERANCE
            && self.min.y <= other.max.y + TOLERANCE
            && self.max.y >= other.min.y - TOLERANCE
    }

    /// `true` if `p` lies inside or on the box, within `tol`.
    #[must_use]
    pub fn contains(&self, p: &Point2, tol: f64) -> bool {
        p.x >= self.min.x - tol
            && p.x <= self.max.x + tol
            && p.y >= self.min.y - tol
            && p.y <= self.max.y + tol
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
