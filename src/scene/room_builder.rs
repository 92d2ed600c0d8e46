use rustc_hash::FxHashMap;

use super::face::FaceId;

/// Key grouping the faces that realise one room-boundary segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopoKey(pub String);

impl TopoKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl From<&str> for TopoKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for TopoKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Per-face payload handed out by the room assemblers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceInfo {
    pub face_id: FaceId,
    pub topo_key: TopoKey,
}

/// Entry of [`RoomBuilder::face_map`].
#[derive(Debug, Clone)]
pub struct FaceEntry {
    /// Stacking order among faces sharing a topo key; higher comes first.
    pub order: i32,
    pub face_info: FaceInfo,
}

/// Topology index from room-boundary segments to structural faces.
#[derive(Debug, Default)]
pub struct RoomBuilder {
    face_map: FxHashMap<FaceId, FaceEntry>,
    by_topo_key: FxHashMap<TopoKey, Vec<FaceId>>,
}

impl RoomBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `face` under `topo_key`. Registering a face again replaces
    /// its entry and moves it to the new key.
    pub fn add_face(&mut self, face: FaceId, topo_key: TopoKey, order: i32) {
        if let Some(old) = self.face_map.get(&face) {
            if let Some(ids) = self.by_topo_key.get_mut(&old.face_info.topo_key) {
                ids.retain(|&id| id != face);
            }
        }
        self.by_topo_key
            .entry(topo_key.clone())
            .or_default()
            .push(face);
        self.face_map.insert(
            face,
            FaceEntry {
                order,
                face_info: FaceInfo {
                    face_id: face,
                    topo_key,
                },
            },
        );
    }

    /// Faces registered under `topo_key`, in registration order.
    #[must_use]
    pub fn get_face_by_topo_key(&self, topo_key: &TopoKey) -> &[FaceId] {
        self.by_topo_key.get(topo_key).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn face_entry(&self, face: FaceId) -> Option<&FaceEntry> {
        self.face_map.get(&face)
    }

    #[must_use]
    pub fn face_map(&self) -> &FxHashMap<FaceId, FaceEntry> {
        &self.face_map
    }
}
