use std::sync::Arc;

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::config::TopologyConfig;
use crate::error::{Result, TopologyError};
use crate::scene::{Layer, RegionId, RoomBuilder, SlabId, SpaceInfo};

use super::assembler::{LayerSnapshot, RoomInfo};
use super::floor_room::FloorRoomInfo;
use super::raw::{RawRoomInfo, RoomSource};
use super::wall_loop::WallLoopInfo;

#[derive(Debug)]
struct LayerRooms {
    wall_loops: Vec<WallLoopInfo>,
    floor_rooms: Vec<FloorRoomInfo>,
    by_floor: FxHashMap<SlabId, usize>,
}

/// Room assemblers of one layer.
///
/// Built empty; [`LayerInfo::init`] creates one [`WallLoopInfo`] per
/// wall-loop record and one [`FloorRoomInfo`] per floor that has a
/// matching floor record. All assemblers share one read-only snapshot.
#[derive(Debug)]
pub struct LayerInfo {
    snapshot: Arc<LayerSnapshot>,
    raw_rooms: Vec<RawRoomInfo>,
    rooms: Option<LayerRooms>,
}

impl LayerInfo {
    #[must_use]
    pub fn new(
        layer: Layer,
        room_builder: RoomBuilder,
        raw_rooms: Vec<RawRoomInfo>,
        config: TopologyConfig,
    ) -> Self {
        Self {
            snapshot: Arc::new(LayerSnapshot {
                layer,
                room_builder,
                config,
            }),
            raw_rooms,
            rooms: None,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> &LayerSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.rooms.is_some()
    }

    /// Builds the room assemblers, replacing any from a previous call.
    ///
    /// A floor without a matching floor record is logged and skipped; the
    /// remaining floors are still processed.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the configuration is invalid.
    pub fn init(&mut self) -> Result<()> {
        self.snapshot.config.validate()?;

        let wall_loops: Vec<WallLoopInfo> = self
            .raw_rooms
            .iter()
            .filter(|raw| raw.source == RoomSource::WallLoop)
            .map(|raw| WallLoopInfo::new(Arc::clone(&self.snapshot), raw.clone()))
            .collect();

        let mut floor_rooms = Vec::new();
        let mut by_floor = FxHashMap::default();
        let mut skipped = 0usize;
        self.snapshot.layer.for_each_floor(|floor_id, floor| {
            let raw = floor.room_region.and_then(|region| {
                self.raw_rooms
                    .iter()
                    .find(|r| r.source == RoomSource::Floor && r.region_id == region)
            });
            let Some(raw) = raw else {
                let err = TopologyError::MissingRoomInfo(format!("floor {floor_id:?}"));
                tracing::warn!(floor = ?floor_id, region = ?floor.room_region, %err, "skipping floor");
                skipped += 1;
                return;
            };
            by_floor.insert(floor_id, floor_rooms.len());
            floor_rooms.push(FloorRoomInfo::new(
                Arc::clone(&self.snapshot),
                raw.clone(),
                floor_id,
            ));
        });

        tracing::debug!(
            wall_loops = wall_loops.len(),
            floor_rooms = floor_rooms.len(),
            skipped_floors = skipped,
            "layer rooms initialised"
        );
        self.rooms = Some(LayerRooms {
            wall_loops,
            floor_rooms,
            by_floor,
        });
        Ok(())
    }

    fn rooms(&self) -> Result<&LayerRooms> {
        self.rooms
            .as_ref()
            .ok_or_else(|| TopologyError::NotInitialized.into())
    }

    /// # Errors
    ///
    /// Returns `TopologyError::NotInitialized` before [`Self::init`].
    pub fn wall_loop_infos(&self) -> Result<&[WallLoopInfo]> {
        Ok(&self.rooms()?.wall_loops)
    }

    /// # Errors
    ///
    /// Returns `TopologyError::NotInitialized` before [`Self::init`].
    pub fn floor_room_infos(&self) -> Result<&[FloorRoomInfo]> {
        Ok(&self.rooms()?.floor_rooms)
    }

    /// Floor room built for `floor`, or `None` if that floor was skipped.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::NotInitialized` before [`Self::init`].
    pub fn room_by_floor(&self, floor: SlabId) -> Result<Option<&FloorRoomInfo>> {
        let rooms = self.rooms()?;
        Ok(rooms.by_floor.get(&floor).map(|&i| &rooms.floor_rooms[i]))
    }

    /// Space infos attached to a room region.
    #[must_use]
    pub fn get_space_infos_by_room_region(&self, region: RegionId) -> Vec<&SpaceInfo> {
        self.snapshot.layer.space_infos_by_region(region).collect()
    }

    /// Computes every cached view of every room, rooms in parallel.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::NotInitialized` before [`Self::init`].
    pub fn warm_caches(&self) -> Result<()> {
        let rooms = self.rooms()?;
        rooms.wall_loops.par_iter().for_each(RoomInfo::warm);
        rooms.floor_rooms.par_iter().for_each(RoomInfo::warm);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ArchError;
    use crate::room::test_fixtures::{
        floor_raw, init_tracing, rect, square_room_scene, wall_loop_raw, ROOM_REGION,
    };
    use crate::scene::{SlabData, SpaceInfo};

    fn layer_info(scene: crate::room::test_fixtures::Scene) -> LayerInfo {
        LayerInfo::new(
            scene.layer,
            scene.builder,
            vec![wall_loop_raw(), floor_raw()],
            scene.config,
        )
    }

    #[test]
    fn accessors_fail_before_init() {
        let info = layer_info(square_room_scene());
        assert!(!info.is_initialized());
        assert!(matches!(
            info.wall_loop_infos(),
            Err(ArchError::Topology(TopologyError::NotInitialized))
        ));
        assert!(info.floor_room_infos().is_err());
        assert!(info.room_by_floor(SlabId::default()).is_err());
        assert!(info.warm_caches().is_err());
    }

    #[test]
    fn floor_without_room_record_is_skipped() {
        init_tracing();
        let mut scene = square_room_scene();
        let orphan = scene
            .layer
            .add_floor(SlabData::new(rect(10.0, 0.0, 12.0, 2.0)).with_room_region(RegionId(42)));
        let unassigned = scene.layer.add_floor(SlabData::new(rect(20.0, 0.0, 22.0, 2.0)));
        let floor = scene.floor;
        let mut info = layer_info(scene);
        info.init().unwrap();

        assert_eq!(info.wall_loop_infos().unwrap().len(), 1);
        assert_eq!(info.floor_room_infos().unwrap().len(), 1);
        assert_eq!(info.room_by_floor(floor).unwrap().unwrap().floor_id(), floor);
        assert!(info.room_by_floor(orphan).unwrap().is_none());
        assert!(info.room_by_floor(unassigned).unwrap().is_none());
    }

    #[test]
    fn invalid_config_fails_init() {
        let mut scene = square_room_scene();
        scene.config = TopologyConfig::default().with_arc_tolerance(-1.0);
        let mut info = layer_info(scene);
        assert!(info.init().is_err());
        assert!(!info.is_initialized());
    }

    #[test]
    fn warm_caches_fills_every_room() {
        let scene = square_room_scene();
        let floor = scene.floor;
        let mut info = layer_info(scene);
        info.init().unwrap();
        info.warm_caches().unwrap();

        let wall_loop = &info.wall_loop_infos().unwrap()[0];
        assert_eq!(wall_loop.floors(), &[floor]);
        assert_eq!(wall_loop.interior_walls().len(), 1);
        let floor_room = &info.floor_room_infos().unwrap()[0];
        assert_eq!(floor_room.walls_in_room_side().len(), 5);
    }

    #[test]
    fn space_infos_by_region() {
        let mut scene = square_room_scene();
        scene.layer.add_space_info(SpaceInfo::new(ROOM_REGION, "living"));
        let mut info = layer_info(scene);
        info.init().unwrap();

        let spaces = info.get_space_infos_by_room_region(ROOM_REGION);
        assert_eq!(spaces.len(), 1);
        assert_eq!(spaces[0].name, "living");
        assert!(info.get_space_infos_by_room_region(RegionId(5)).is_empty());
        assert_eq!(info.wall_loop_infos().unwrap()[0].space_infos().len(), 1);
    }
}
