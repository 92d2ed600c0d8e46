use super::Point2;

/// Returns the minimum distance from `p` to the segment `a`–`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < 1e-20 {
        return (p - a).norm();
    }

    // Project onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Returns the minimum distance from `p` to the closed loop `points`.
///
/// Returns `f64::INFINITY` for an empty loop.
#[must_use]
pub fn point_to_loop_dist(p: &Point2, points: &[Point2]) -> f64 {
    let n = points.len();
    match n {
        0 => f64::INFINITY,
        1 => (p - points[0]).norm(),
        _ => (0..n)
            .map(|i| point_to_segment_dist(p, &points[i], &points[(i + 1) % n]))
            .fold(f64::INFINITY, f64::min),
    }
}
