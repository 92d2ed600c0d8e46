use crate::geometry::Pline;

use super::structure::StructureId;

slotmap::new_key_type! {
    /// Unique identifier for a structural face in a layer.
    pub struct FaceId;
}

/// A face of a structural element, seen in plan.
///
/// `outline` is the face's footprint: a single segment for a vertical wall
/// face, a closed loop for a horizontal one.
#[derive(Debug, Clone)]
pub struct FaceData {
    pub outline: Pline,
    /// Every structure the face touches.
    pub link_structures: Vec<StructureId>,
    /// The structure that owns the face.
    pub master: Option<StructureId>,
}

impl FaceData {
    #[must_use]
    pub fn new(outline: Pline) -> Self {
        Self {
            outline,
            link_structures: Vec::new(),
            master: None,
        }
    }

    /// Sets `structure` as the master and records it as linked.
    #[must_use]
    pub fn owned_by(mut self, structure: StructureId) -> Self {
        self.master = Some(structure);
        if !self.link_structures.contains(&structure) {
            self.link_structures.push(structure);
        }
        self
    }

    /// Records an additional linked structure.
    #[must_use]
    pub fn linked_to(mut self, structure: StructureId) -> Self {
        if !self.link_structures.contains(&structure) {
            self.link_structures.push(structure);
        }
        self
    }
}
