/// Identifier of a room region shared by a room record, its slabs and
/// its space infos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u64);

/// Named usage space attached to a room region.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceInfo {
    pub region_id: RegionId,
    pub name: String,
}

impl SpaceInfo {
    #[must_use]
    pub fn new(region_id: RegionId, name: impl Into<String>) -> Self {
        Self {
            region_id,
            name: name.into(),
        }
    }
}
