use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;

use crate::scene::{SlabId, StructureId, WallFaceType};

use super::assembler::{LayerSnapshot, RoomCore, RoomInfo};
use super::raw::RawRoomInfo;

/// A room generated from a floor slab.
///
/// Each face of a floor room has one master structure; only that master
/// decides the wall side, linked structures are ignored.
#[derive(Debug)]
pub struct FloorRoomInfo {
    core: RoomCore,
    floor_id: SlabId,
    walls_in_room_side: OnceLock<FxHashMap<StructureId, WallFaceType>>,
}

impl FloorRoomInfo {
    #[must_use]
    pub fn new(snapshot: Arc<LayerSnapshot>, raw: RawRoomInfo, floor_id: SlabId) -> Self {
        Self {
            core: RoomCore::new(snapshot, raw),
            floor_id,
            walls_in_room_side: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn floor_id(&self) -> SlabId {
        self.floor_id
    }
}

impl RoomInfo for FloorRoomInfo {
    fn core(&self) -> &RoomCore {
        &self.core
    }

    fn walls_in_room_side(&self) -> &FxHashMap<StructureId, WallFaceType> {
        self.walls_in_room_side.get_or_init(|| {
            let layer = self.core.layer();
            let mut map = FxHashMap::default();
            for &face_id in self.core.faces() {
                let Ok(face) = layer.face(face_id) else {
                    tracing::warn!(face = ?face_id, "room face missing from layer");
                    continue;
                };
                let Some(master) = face.master else {
                    continue;
                };
                let Ok(structure) = layer.structure(master) else {
                    tracing::warn!(face = ?face_id, structure = ?master, "master structure missing from layer");
                    continue;
                };
                let side = structure.as_wall().and_then(|w| w.face_type(face_id));
                if let Some(side) = side {
                    map.insert(master, side);
                }
            }
            map
        })
    }
}
