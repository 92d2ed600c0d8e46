//! Plan-view polygon booleans on top of `i_overlay`.

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

use crate::geometry::Region2;
use crate::math::Point2;

/// A closed loop of plan points; the last point connects to the first.
pub type Path = Vec<Point2>;

/// Boolean operation applied by [`clip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipMode {
    Intersection,
    Union,
    Difference,
    Xor,
}

/// Rule deciding which areas of a set of paths are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillType {
    EvenOdd,
    #[default]
    NonZero,
    Positive,
    Negative,
}

impl From<FillType> for FillRule {
    fn from(fill: FillType) -> Self {
        match fill {
            FillType::EvenOdd => FillRule::EvenOdd,
            FillType::NonZero => FillRule::NonZero,
            FillType::Positive => FillRule::Positive,
            FillType::Negative => FillRule::Negative,
        }
    }
}

impl From<ClipMode> for OverlayRule {
    fn from(mode: ClipMode) -> Self {
        match mode {
            ClipMode::Intersection => OverlayRule::Intersect,
            ClipMode::Union => OverlayRule::Union,
            ClipMode::Difference => OverlayRule::Difference,
            ClipMode::Xor => OverlayRule::Xor,
        }
    }
}

/// Fill rules for the two inputs of [`clip`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipOptions {
    pub subject_fill: FillType,
    pub clip_fill: FillType,
}

impl ClipOptions {
    /// Same fill rule for subject and clip.
    #[must_use]
    pub fn uniform(fill: FillType) -> Self {
        Self {
            subject_fill: fill,
            clip_fill: fill,
        }
    }
}

type RawPaths = Vec<Vec<[f64; 2]>>;

/// Boolean of `subject` and `clip_paths`, grouped into regions.
///
/// Each input is filled by its own rule from `options`. No overlap yields
/// an empty vector, never an error. Disjoint result pieces come back as
/// separate regions.
#[must_use]
pub fn clip_regions(
    subject: &[Path],
    clip_paths: &[Path],
    mode: ClipMode,
    options: ClipOptions,
) -> Vec<Region2> {
    let subject = to_raw(subject);
    let clip_paths = to_raw(clip_paths);
    if subject.is_empty() && clip_paths.is_empty() {
        return Vec::new();
    }

    let shapes = if options.subject_fill == options.clip_fill {
        subject.overlay(&clip_paths, mode.into(), options.subject_fill.into())
    } else {
        // Resolve each input under its own rule first; the resolved
        // contours are non-overlapping, so non-zero then reads them as-is.
        let subject = normalize(&subject, options.subject_fill);
        let clip_paths = normalize(&clip_paths, options.clip_fill);
        subject.overlay(&clip_paths, mode.into(), FillRule::NonZero)
    };

    shapes.iter().filter_map(|shape| shape_to_region(shape)).collect()
}

/// Boolean of `subject` and `clip_paths` as a flat list of loops.
///
/// Outer loops come back counter-clockwise and holes clockwise, each hole
/// directly after the outer loop it belongs to.
#[must_use]
pub fn clip(subject: &[Path], clip_paths: &[Path], mode: ClipMode, options: ClipOptions) -> Vec<Path> {
    clip_regions(subject, clip_paths, mode, options)
        .into_iter()
        .flat_map(|region| region.to_paths())
        .collect()
}

/// Total area of the overlap between two regions.
#[must_use]
pub fn intersection_area(a: &Region2, b: &Region2) -> f64 {
    clip_regions(
        &a.to_paths(),
        &b.to_paths(),
        ClipMode::Intersection,
        ClipOptions::uniform(FillType::NonZero),
    )
    .iter()
    .map(Region2::area)
    .sum()
}

fn normalize(paths: &RawPaths, fill: FillType) -> RawPaths {
    if paths.is_empty() {
        return Vec::new();
    }
    let empty: RawPaths = Vec::new();
    paths
        .overlay(&empty, OverlayRule::Subject, fill.into())
        .into_iter()
        .flatten()
        .collect()
}

fn to_raw(paths: &[Path]) -> RawPaths {
    paths
        .iter()
        .filter(|p| p.len() >= 3)
        .map(|p| p.iter().map(|pt| [pt.x, pt.y]).collect())
        .collect()
}

fn shape_to_region(shape: &[Vec<[f64; 2]>]) -> Option<Region2> {
    let (outer, holes) = shape.split_first()?;
    let outer: Vec<Point2> = outer.iter().map(|p| Point2::new(p[0], p[1])).collect();
    let holes: Vec<Vec<Point2>> = holes
        .iter()
        .map(|h| h.iter().map(|p| Point2::new(p[0], p[1])).collect())
        .collect();
    let region = Region2::new(&outer, &holes);
    (!region.is_empty()).then_some(region)
}
