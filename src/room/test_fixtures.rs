//! Shared scenes for the room assembler tests.
//!
//! A 4 x 4 room bounded by four walls, with a free-standing partition wall
//! (x 1.9..2.1, y 1..3) forming the room's single hole. Each boundary wall
//! faces the room with its `Left` face and the outside with its `Right`
//! face. A floor slab covers the room and carries the room's region.

#![allow(clippy::unwrap_used)]

use crate::config::TopologyConfig;
use crate::geometry::Pline;
use crate::math::Point2;
use crate::scene::{
    FaceData, FaceId, Layer, RegionId, RoomBuilder, SlabData, SlabId, StructureData, StructureId,
    WallFaceType,
};

use super::assembler::LayerSnapshot;
use super::raw::{RawRoomInfo, RoomSource, TopoEntry};

pub(crate) const ROOM_REGION: RegionId = RegionId(1);

pub(crate) struct Scene {
    pub layer: Layer,
    pub builder: RoomBuilder,
    pub config: TopologyConfig,
    /// Boundary walls: bottom, right, top, left.
    pub walls: Vec<StructureId>,
    /// Room-side faces of `walls`, in loop order, under keys `e0..e3`.
    pub inner_faces: Vec<FaceId>,
    pub partition: StructureId,
    /// Left and right faces of the partition, under keys `h0`, `h1`.
    pub partition_faces: [FaceId; 2],
    pub floor: SlabId,
}

impl Scene {
    pub fn into_snapshot(self) -> LayerSnapshot {
        LayerSnapshot {
            layer: self.layer,
            room_builder: self.builder,
            config: self.config,
        }
    }
}

pub(crate) fn segment(x0: f64, y0: f64, x1: f64, y1: f64) -> Pline {
    Pline::from_points(&[Point2::new(x0, y0), Point2::new(x1, y1)], false)
}

/// Counter-clockwise rectangle starting at its minimum corner.
pub(crate) fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Pline {
    Pline::closed_polygon(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)])
}

const CORNERS: [(f64, f64); 4] = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
/// Outward wall thickness offset per side.
const OUTWARD: [(f64, f64); 4] = [(0.0, -0.2), (0.2, 0.0), (0.0, 0.2), (-0.2, 0.0)];

pub(crate) fn square_room_scene() -> Scene {
    let mut layer = Layer::new();
    let mut builder = RoomBuilder::new();

    let mut walls = Vec::new();
    let mut inner_faces = Vec::new();
    for i in 0..4 {
        let (x0, y0) = CORNERS[i];
        let (x1, y1) = CORNERS[(i + 1) % 4];
        let (dx, dy) = OUTWARD[i];

        let inner = layer.add_face(FaceData::new(segment(x0, y0, x1, y1)));
        let outer = layer.add_face(FaceData::new(segment(x1 + dx, y1 + dy, x0 + dx, y0 + dy)));
        let wall = layer.add_structure(StructureData::wall(
            format!("wall{i}"),
            vec![(inner, WallFaceType::Left), (outer, WallFaceType::Right)],
        ));
        for face in [inner, outer] {
            let data = layer.face_mut(face).unwrap();
            data.master = Some(wall);
            data.link_structures.push(wall);
        }
        builder.add_face(inner, format!("e{i}").into(), 0);
        builder.add_face(outer, format!("x{i}").into(), 0);
        walls.push(wall);
        inner_faces.push(inner);
    }

    let left = layer.add_face(FaceData::new(segment(1.9, 1.0, 1.9, 3.0)));
    let right = layer.add_face(FaceData::new(segment(2.1, 3.0, 2.1, 1.0)));
    let partition = layer.add_structure(StructureData::wall(
        "partition",
        vec![(left, WallFaceType::Left), (right, WallFaceType::Right)],
    ));
    for face in [left, right] {
        let data = layer.face_mut(face).unwrap();
        data.master = Some(partition);
        data.link_structures.push(partition);
    }
    builder.add_face(left, "h0".into(), 0);
    builder.add_face(right, "h1".into(), 0);

    let floor = layer.add_floor(SlabData::new(rect(0.0, 0.0, 4.0, 4.0)).with_room_region(ROOM_REGION));

    Scene {
        layer,
        builder,
        config: TopologyConfig::default(),
        walls,
        inner_faces,
        partition,
        partition_faces: [left, right],
        floor,
    }
}

fn room_record(source: RoomSource) -> RawRoomInfo {
    let outer = (0..4)
        .map(|i| {
            let (x0, y0) = CORNERS[i];
            let (x1, y1) = CORNERS[(i + 1) % 4];
            TopoEntry::new(format!("e{i}"), segment(x0, y0, x1, y1))
        })
        .collect();
    let hole = vec![
        TopoEntry::new("h0", segment(1.9, 1.0, 1.9, 3.0)),
        TopoEntry::new("h1", segment(2.1, 3.0, 2.1, 1.0)),
    ];
    RawRoomInfo::new(ROOM_REGION, source, rect(0.0, 0.0, 4.0, 4.0))
        .with_outer(outer)
        .with_hole(hole, rect(1.9, 1.0, 2.1, 3.0))
}

/// Wall-loop record of the scene's room.
pub(crate) fn wall_loop_raw() -> RawRoomInfo {
    room_record(RoomSource::WallLoop)
}

/// Floor record of the scene's room.
pub(crate) fn floor_raw() -> RawRoomInfo {
    room_record(RoomSource::Floor)
}

/// Installs a test subscriber once; output shows with `RUST_LOG`.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
