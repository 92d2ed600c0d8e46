//! Bulge arcs in the plan view.
//!
//! Bulge convention: `bulge = tan(sweep_angle / 4)`.
//! - `bulge = 0`: straight line
//! - `bulge > 0`: counter-clockwise arc
//! - `bulge < 0`: clockwise arc
//! - `|bulge| = 1`: semicircle

use super::{Point2, Vector2};

/// Upper bound on the chords a single arc is tessellated into.
pub const MAX_ARC_SEGMENTS: u32 = 4096;

/// A circular arc in center-radius-angle form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc2 {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    /// Signed sweep; positive is counter-clockwise.
    pub sweep: f64,
}

impl Arc2 {
    /// Builds the arc spanned by a bulge segment from `p0` to `p1`.
    ///
    /// Returns `None` for a zero-length chord or a zero bulge (straight segment).
    #[must_use]
    pub fn from_bulge(p0: &Point2, p1: &Point2, bulge: f64) -> Option<Self> {
        let chord = p1 - p0;
        let chord_len = chord.norm();
        if chord_len < 1e-12 || bulge.abs() < 1e-12 {
            return None;
        }

        // Offset of the center from the chord midpoint, in half-chord units.
        let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
        let mid = nalgebra::center(p0, p1);
        let left = Vector2::new(-chord.y, chord.x) / chord_len;
        let center = mid + left * (sagitta_ratio * chord_len * 0.5);

        // r = d*(1+b²)/(4*|b|)
        let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());
        let start_angle = (p0.y - center.y).atan2(p0.x - center.x);

        Some(Self {
            center,
            radius,
            start_angle,
            sweep: 4.0 * bulge.atan(),
        })
    }

    /// Evaluates the arc at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let angle = self.start_angle + self.sweep * t;
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Number of chords needed so no chord deviates from the arc by more
    /// than `tolerance` (sagitta bound), capped at [`MAX_ARC_SEGMENTS`].
    #[must_use]
    pub fn subdivision_count(&self, tolerance: f64) -> u32 {
        let abs_sweep = self.sweep.abs();
        if self.radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
            return 1;
        }
        let max_angle = if tolerance >= self.radius {
            std::f64::consts::PI
        } else {
            2.0 * (1.0 - tolerance / self.radius).acos()
        };
        let n = (abs_sweep / max_angle).ceil();
        if !n.is_finite() || n >= f64::from(MAX_ARC_SEGMENTS) {
            return MAX_ARC_SEGMENTS;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = n as u32;
        n.max(1)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-10;

    #[test]
    fn semicircle_ccw_passes_below_chord() {
        let arc = Arc2::from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), 1.0).unwrap();
        assert!((arc.center.x - 1.0).abs() < TOL);
        assert!(arc.center.y.abs() < TOL);
        assert!((arc.radius - 1.0).abs() < TOL);
        assert!((arc.sweep - PI).abs() < TOL);

        let mid = arc.point_at(0.5);
        assert!((mid.x - 1.0).abs() < TOL, "mid.x={}", mid.x);
        assert!((mid.y + 1.0).abs() < TOL, "mid.y={}", mid.y);

        let end = arc.point_at(1.0);
        assert!((end.x - 2.0).abs() < TOL);
        assert!(end.y.abs() < TOL);
    }

    #[test]
    fn semicircle_cw_passes_above_chord() {
        let arc = Arc2::from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), -1.0).unwrap();
        let mid = arc.point_at(0.5);
        assert!((mid.y - 1.0).abs() < TOL, "mid.y={}", mid.y);
    }

    #[test]
    fn quarter_circle_about_origin() {
        let bulge = (PI / 8.0).tan();
        let arc = Arc2::from_bulge(&Point2::new(1.0, 0.0), &Point2::new(0.0, 1.0), bulge).unwrap();
        assert!((arc.radius - 1.0).abs() < 1e-6);
        assert!(arc.center.coords.norm() < 1e-6);
        let mid = arc.point_at(0.5);
        let expected = (PI / 4.0).cos();
        assert!((mid.x - expected).abs() < 1e-6);
        assert!((mid.y - expected).abs() < 1e-6);
    }

    #[test]
    fn straight_bulge_is_not_an_arc() {
        assert!(Arc2::from_bulge(&Point2::new(0.0, 0.0), &Point2::new(1.0, 0.0), 0.0).is_none());
        assert!(Arc2::from_bulge(&Point2::new(1.0, 1.0), &Point2::new(1.0, 1.0), 0.5).is_none());
    }

    #[test]
    fn subdivision_tracks_tolerance() {
        let arc = Arc2::from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), 1.0).unwrap();
        assert_eq!(arc.subdivision_count(10.0), 1);
        assert!(arc.subdivision_count(0.001) > 10);
    }

    #[test]
    fn subdivision_is_capped_for_tiny_tolerance() {
        let arc = Arc2::from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), 1.0).unwrap();
        assert_eq!(arc.subdivision_count(1e-20), MAX_ARC_SEGMENTS);
        assert_eq!(arc.subdivision_count(f64::MIN_POSITIVE), MAX_ARC_SEGMENTS);
    }
}
