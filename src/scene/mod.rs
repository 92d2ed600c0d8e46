//! In-memory snapshot of a building layer: structures, their faces, slabs
//! and the topology index the room assemblers read.

pub mod face;
pub mod room_builder;
pub mod slab;
pub mod space;
pub mod structure;

pub use face::{FaceData, FaceId};
pub use room_builder::{FaceEntry, FaceInfo, RoomBuilder, TopoKey};
pub use slab::{SlabData, SlabId};
pub use space::{RegionId, SpaceInfo};
pub use structure::{BeamData, StructureData, StructureId, StructureKind, WallData, WallFaceType};

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Arena that owns every entity of one layer.
///
/// Entities reference each other via typed IDs (generational indices).
#[derive(Debug, Default)]
pub struct Layer {
    structures: SlotMap<StructureId, StructureData>,
    faces: SlotMap<FaceId, FaceData>,
    floors: SlotMap<SlabId, SlabData>,
    ceilings: SlotMap<SlabId, SlabData>,
    space_infos: Vec<SpaceInfo>,
}

impl Layer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Structures ---

    pub fn add_structure(&mut self, data: StructureData) -> StructureId {
        self.structures.insert(data)
    }

    /// # Errors
    ///
    /// Returns an error if the structure is not in the layer.
    pub fn structure(&self, id: StructureId) -> Result<&StructureData, TopologyError> {
        self.structures
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("structure".into()))
    }

    /// # Errors
    ///
    /// Returns an error if the structure is not in the layer.
    pub fn structure_mut(&mut self, id: StructureId) -> Result<&mut StructureData, TopologyError> {
        self.structures
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("structure".into()))
    }

    /// Beams of the layer with their face lists.
    pub fn beams(&self) -> impl Iterator<Item = (StructureId, &BeamData)> {
        self.structures.iter().filter_map(|(id, s)| match &s.kind {
            StructureKind::Beam(beam) => Some((id, beam)),
            _ => None,
        })
    }

    // --- Faces ---

    pub fn add_face(&mut self, data: FaceData) -> FaceId {
        self.faces.insert(data)
    }

    /// # Errors
    ///
    /// Returns an error if the face is not in the layer.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// # Errors
    ///
    /// Returns an error if the face is not in the layer.
    pub fn face_mut(&mut self, id: FaceId) -> Result<&mut FaceData, TopologyError> {
        self.faces
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    // --- Floors and ceilings ---

    pub fn add_floor(&mut self, data: SlabData) -> SlabId {
        self.floors.insert(data)
    }

    pub fn add_ceiling(&mut self, data: SlabData) -> SlabId {
        self.ceilings.insert(data)
    }

    /// # Errors
    ///
    /// Returns an error if the floor is not in the layer.
    pub fn floor(&self, id: SlabId) -> Result<&SlabData, TopologyError> {
        self.floors
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("floor".into()))
    }

    /// # Errors
    ///
    /// Returns an error if the ceiling is not in the layer.
    pub fn ceiling(&self, id: SlabId) -> Result<&SlabData, TopologyError> {
        self.ceilings
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("ceiling".into()))
    }

    pub fn for_each_floor(&self, mut f: impl FnMut(SlabId, &SlabData)) {
        for (id, floor) in &self.floors {
            f(id, floor);
        }
    }

    pub fn for_each_ceiling(&self, mut f: impl FnMut(SlabId, &SlabData)) {
        for (id, ceiling) in &self.ceilings {
            f(id, ceiling);
        }
    }

    // --- Space infos ---

    pub fn add_space_info(&mut self, info: SpaceInfo) {
        self.space_infos.push(info);
    }

    /// Space infos attached to `region`, in insertion order.
    pub fn space_infos_by_region(&self, region: RegionId) -> impl Iterator<Item = &SpaceInfo> {
        self.space_infos.iter().filter(move |s| s.region_id == region)
    }
}
