//! Plan-view containment and boolean queries used by the room assemblers.

pub mod clip;
pub mod position;

pub use clip::{clip, clip_regions, intersection_area, ClipMode, ClipOptions, FillType, Path};
pub use position::{PositionJudge, PtLoopPosition};
