use super::face::FaceId;

slotmap::new_key_type! {
    /// Unique identifier for a structural element in a layer.
    pub struct StructureId;
}

/// Which side of a wall a face covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallFaceType {
    Left,
    Right,
    Start,
    End,
    Top,
    Bottom,
}

/// Faces of a wall, each tagged with the side it covers.
#[derive(Debug, Clone, Default)]
pub struct WallData {
    pub faces: Vec<(FaceId, WallFaceType)>,
}

impl WallData {
    /// Side of this wall that `face` covers, or `None` if the face is not
    /// one of the wall's own faces.
    #[must_use]
    pub fn face_type(&self, face: FaceId) -> Option<WallFaceType> {
        self.faces
            .iter()
            .find_map(|&(id, kind)| (id == face).then_some(kind))
    }
}

#[derive(Debug, Clone, Default)]
pub struct BeamData {
    pub face_list: Vec<FaceId>,
}

/// Discriminates structural elements; room code branches on this instead
/// of on runtime types.
#[derive(Debug, Clone)]
pub enum StructureKind {
    Wall(WallData),
    Column,
    Beam(BeamData),
}

#[derive(Debug, Clone)]
pub struct StructureData {
    pub name: String,
    pub kind: StructureKind,
}

impl StructureData {
    #[must_use]
    pub fn wall(name: impl Into<String>, faces: Vec<(FaceId, WallFaceType)>) -> Self {
        Self {
            name: name.into(),
            kind: StructureKind::Wall(WallData { faces }),
        }
    }

    #[must_use]
    pub fn beam(name: impl Into<String>, face_list: Vec<FaceId>) -> Self {
        Self {
            name: name.into(),
            kind: StructureKind::Beam(BeamData { face_list }),
        }
    }

    #[must_use]
    pub fn as_wall(&self) -> Option<&WallData> {
        match &self.kind {
            StructureKind::Wall(wall) => Some(wall),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_wall(&self) -> bool {
        matches!(self.kind, StructureKind::Wall(_))
    }
}
