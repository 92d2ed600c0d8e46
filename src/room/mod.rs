//! Room topology assemblers.
//!
//! Each room record of a layer becomes an assembler exposing memoized,
//! read-only views: the structural faces bounding it, the slabs and beam
//! faces overlapping it, and which side of each wall faces into it.

pub mod assembler;
pub mod floor_room;
pub mod layer_info;
pub mod raw;
pub mod wall_loop;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use assembler::{LayerSnapshot, RoomCore, RoomInfo, StructureFaceInfos};
pub use floor_room::FloorRoomInfo;
pub use layer_info::LayerInfo;
pub use raw::{RawRoomInfo, RoomSource, TopoEntry};
pub use wall_loop::WallLoopInfo;
