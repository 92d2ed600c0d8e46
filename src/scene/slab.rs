use crate::geometry::{Pline, Region2};
use crate::math::Isometry2;

use super::space::RegionId;

slotmap::new_key_type! {
    /// Unique identifier for a floor or ceiling slab.
    pub struct SlabId;
}

/// A floor or ceiling: a local outline placed into the layer.
#[derive(Debug, Clone)]
pub struct SlabData {
    pub outline: Pline,
    pub holes: Vec<Pline>,
    /// Local-to-world placement of `outline` and `holes`.
    pub placement: Isometry2,
    /// Room region this slab was generated for, if any.
    pub room_region: Option<RegionId>,
}

impl SlabData {
    #[must_use]
    pub fn new(outline: Pline) -> Self {
        Self {
            outline,
            holes: Vec::new(),
            placement: Isometry2::identity(),
            room_region: None,
        }
    }

    #[must_use]
    pub fn with_placement(mut self, placement: Isometry2) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn with_room_region(mut self, region: RegionId) -> Self {
        self.room_region = Some(region);
        self
    }

    /// Outline and holes in world space, arcs tessellated to `tolerance`.
    #[must_use]
    pub fn world_region(&self, tolerance: f64) -> Region2 {
        let outer = self.outline.transformed(&self.placement);
        let holes: Vec<Pline> = self
            .holes
            .iter()
            .map(|h| h.transformed(&self.placement))
            .collect();
        Region2::from_plines(&outer, &holes, tolerance)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn world_region_applies_placement() {
        let slab = SlabData::new(Pline::closed_polygon(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]))
            .with_placement(Isometry2::translation(5.0, 5.0));
        let region = slab.world_region(0.01);
        let bb = region.bounding_box().unwrap();
        assert!((bb.min.x - 5.0).abs() < 1e-12);
        assert!((bb.max.y - 6.0).abs() < 1e-12);
        assert!((region.area() - 2.0).abs() < 1e-12);
    }
}
