use crate::geometry::Pline;
use crate::scene::{RegionId, TopoKey};

/// Which generator produced a room record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomSource {
    /// Closed loop of wall faces.
    WallLoop,
    /// Outline of a floor slab.
    Floor,
}

/// One boundary segment of a room loop.
#[derive(Debug, Clone)]
pub struct TopoEntry {
    pub topo_key: TopoKey,
    /// Separator with no structure behind it; carries no faces.
    pub is_aux: bool,
    /// Plan curve of the segment.
    pub curve: Pline,
}

impl TopoEntry {
    #[must_use]
    pub fn new(topo_key: impl Into<String>, curve: Pline) -> Self {
        Self {
            topo_key: TopoKey::new(topo_key),
            is_aux: false,
            curve,
        }
    }

    #[must_use]
    pub fn aux(topo_key: impl Into<String>, curve: Pline) -> Self {
        Self {
            is_aux: true,
            ..Self::new(topo_key, curve)
        }
    }
}

/// Room record as produced by the layer's room generator.
#[derive(Debug, Clone)]
pub struct RawRoomInfo {
    pub region_id: RegionId,
    pub source: RoomSource,
    pub outer: Vec<TopoEntry>,
    pub holes: Vec<Vec<TopoEntry>>,
    /// World-space outer boundary.
    pub outline: Pline,
    /// World-space hole boundaries, parallel to `holes`.
    pub hole_outlines: Vec<Pline>,
}

impl RawRoomInfo {
    #[must_use]
    pub fn new(region_id: RegionId, source: RoomSource, outline: Pline) -> Self {
        Self {
            region_id,
            source,
            outer: Vec::new(),
            holes: Vec::new(),
            outline,
            hole_outlines: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_outer(mut self, entries: Vec<TopoEntry>) -> Self {
        self.outer = entries;
        self
    }

    #[must_use]
    pub fn with_hole(mut self, entries: Vec<TopoEntry>, outline: Pline) -> Self {
        self.holes.push(entries);
        self.hole_outlines.push(outline);
        self
    }

    /// Every entry of the outer loop followed by every hole entry.
    pub fn entries(&self) -> impl Iterator<Item = &TopoEntry> {
        self.outer.iter().chain(self.holes.iter().flatten())
    }
}
