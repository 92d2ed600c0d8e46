use std::sync::{Arc, OnceLock};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::TopologyConfig;
use crate::geometry::{Pline, Region2};
use crate::math::polygon_2d::Aabb2;
use crate::query::{intersection_area, Path, PositionJudge};
use crate::scene::{
    FaceEntry, FaceId, FaceInfo, Layer, RoomBuilder, SlabData, SlabId, SpaceInfo, StructureId,
    WallFaceType,
};

use super::raw::{RawRoomInfo, TopoEntry};

/// Read-only layer data shared by every room assembler of a layer.
#[derive(Debug)]
pub struct LayerSnapshot {
    pub layer: Layer,
    pub room_builder: RoomBuilder,
    pub config: TopologyConfig,
}

/// Structural faces of a room, grouped by loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureFaceInfos {
    pub outer: Vec<FaceInfo>,
    /// One list per hole, parallel to the raw record's holes.
    pub holes: Vec<Vec<FaceInfo>>,
}

impl StructureFaceInfos {
    /// Outer face infos followed by every hole's.
    pub fn iter(&self) -> impl Iterator<Item = &FaceInfo> {
        self.outer.iter().chain(self.holes.iter().flatten())
    }

    /// The loop (outer or one hole) that contains `face`.
    #[must_use]
    pub fn loop_of(&self, face: FaceId) -> Option<&[FaceInfo]> {
        std::iter::once(&self.outer)
            .chain(self.holes.iter())
            .find(|l| l.iter().any(|info| info.face_id == face))
            .map(Vec::as_slice)
    }
}

/// Memoized views over one room record.
///
/// Every getter computes its value on first call and returns the stored
/// value afterwards. There is no invalidation: a changed layer means a new
/// `LayerInfo` and new assemblers.
#[derive(Debug)]
pub struct RoomCore {
    snapshot: Arc<LayerSnapshot>,
    raw: RawRoomInfo,
    structure_face_infos: OnceLock<StructureFaceInfos>,
    split_curves: OnceLock<Vec<Pline>>,
    space_infos: OnceLock<Vec<SpaceInfo>>,
    floors: OnceLock<Vec<SlabId>>,
    ceilings: OnceLock<Vec<SlabId>>,
    structures: OnceLock<Vec<StructureId>>,
    faces: OnceLock<Vec<FaceId>>,
    beam_faces: OnceLock<Vec<FaceId>>,
    geometry: OnceLock<Region2>,
    path: OnceLock<Vec<Path>>,
}

impl RoomCore {
    #[must_use]
    pub fn new(snapshot: Arc<LayerSnapshot>, raw: RawRoomInfo) -> Self {
        Self {
            snapshot,
            raw,
            structure_face_infos: OnceLock::new(),
            split_curves: OnceLock::new(),
            space_infos: OnceLock::new(),
            floors: OnceLock::new(),
            ceilings: OnceLock::new(),
            structures: OnceLock::new(),
            faces: OnceLock::new(),
            beam_faces: OnceLock::new(),
            geometry: OnceLock::new(),
            path: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn raw(&self) -> &RawRoomInfo {
        &self.raw
    }

    #[must_use]
    pub fn layer(&self) -> &Layer {
        &self.snapshot.layer
    }

    #[must_use]
    pub fn config(&self) -> &TopologyConfig {
        &self.snapshot.config
    }

    /// Faces behind each non-aux boundary entry, highest `order` first.
    ///
    /// Faces with equal order keep their topo-key registration order.
    pub fn structure_face_infos(&self) -> &StructureFaceInfos {
        self.structure_face_infos.get_or_init(|| {
            let builder = &self.snapshot.room_builder;
            StructureFaceInfos {
                outer: collect_face_infos(&self.raw.outer, builder),
                holes: self
                    .raw
                    .holes
                    .iter()
                    .map(|hole| collect_face_infos(hole, builder))
                    .collect(),
            }
        })
    }

    /// Curves of the aux entries: room separators with no structure.
    pub fn split_curves(&self) -> &[Pline] {
        self.split_curves.get_or_init(|| {
            self.raw
                .entries()
                .filter(|e| e.is_aux)
                .map(|e| e.curve.clone())
                .collect()
        })
    }

    pub fn space_infos(&self) -> &[SpaceInfo] {
        self.space_infos.get_or_init(|| {
            self.layer()
                .space_infos_by_region(self.raw.region_id)
                .cloned()
                .collect()
        })
    }

    /// Layer floors whose world outline overlaps the room.
    pub fn floors(&self) -> &[SlabId] {
        self.floors.get_or_init(|| {
            let mut out = Vec::new();
            self.layer().for_each_floor(|id, slab| {
                if self.overlaps_slab(slab) {
                    out.push(id);
                }
            });
            out
        })
    }

    /// Layer ceilings whose world outline overlaps the room.
    pub fn ceilings(&self) -> &[SlabId] {
        self.ceilings.get_or_init(|| {
            let mut out = Vec::new();
            self.layer().for_each_ceiling(|id, slab| {
                if self.overlaps_slab(slab) {
                    out.push(id);
                }
            });
            out
        })
    }

    /// Face ids of [`Self::structure_face_infos`], outer loop first.
    pub fn faces(&self) -> &[FaceId] {
        self.faces
            .get_or_init(|| self.structure_face_infos().iter().map(|i| i.face_id).collect())
    }

    /// Masters and linked structures of the room's faces, first-seen order.
    pub fn structures(&self) -> &[StructureId] {
        self.structures.get_or_init(|| {
            let mut seen = FxHashSet::default();
            let mut out = Vec::new();
            for &face_id in self.faces() {
                let Ok(face) = self.layer().face(face_id) else {
                    tracing::warn!(face = ?face_id, "room face missing from layer; skipping");
                    continue;
                };
                for id in face.master.iter().chain(&face.link_structures) {
                    if seen.insert(*id) {
                        out.push(*id);
                    }
                }
            }
            out
        })
    }

    /// Beam faces with at least one segment start inside or on the room.
    pub fn beam_faces(&self) -> &[FaceId] {
        self.beam_faces.get_or_init(|| {
            let judge = PositionJudge::new(self.config().on_tolerance);
            let region = self.geometry();
            let layer = self.layer();
            let mut out = Vec::new();
            for (beam_id, beam) in layer.beams() {
                for &face_id in &beam.face_list {
                    let Ok(face) = layer.face(face_id) else {
                        tracing::warn!(beam = ?beam_id, face = ?face_id, "beam face missing from layer; skipping");
                        continue;
                    };
                    let touches = face
                        .outline
                        .segment_starts()
                        .iter()
                        .any(|p| judge.pt_to_polygon(p, region).is_inside_or_on());
                    if touches {
                        out.push(face_id);
                    }
                }
            }
            out
        })
    }

    /// Room outline and holes, arcs tessellated.
    pub fn geometry(&self) -> &Region2 {
        self.geometry.get_or_init(|| {
            Region2::from_plines(
                &self.raw.outline,
                &self.raw.hole_outlines,
                self.config().arc_tolerance,
            )
        })
    }

    /// Loops of [`Self::geometry`] as clip paths, outer first.
    pub fn path(&self) -> &[Path] {
        self.path.get_or_init(|| self.geometry().to_paths())
    }

    /// Forces every cached view.
    pub fn warm(&self) {
        let _ = self.structure_face_infos();
        let _ = self.split_curves();
        let _ = self.space_infos();
        let _ = self.floors();
        let _ = self.ceilings();
        let _ = self.structures();
        let _ = self.beam_faces();
        let _ = self.path();
    }

    fn overlaps_slab(&self, slab: &SlabData) -> bool {
        let config = self.config();
        let slab_region = slab.world_region(config.arc_tolerance);
        let room = self.geometry();
        let boxes_meet = match (room.bounding_box(), slab_region.bounding_box()) {
            (Some(a), Some(b)) => a.overlaps(&b),
            _ => false,
        };
        boxes_meet && intersection_area(room, &slab_region) > config.min_overlap_area
    }
}

fn collect_face_infos(entries: &[TopoEntry], builder: &RoomBuilder) -> Vec<FaceInfo> {
    let mut out = Vec::new();
    for entry in entries.iter().filter(|e| !e.is_aux) {
        let mut faces: Vec<&FaceEntry> = builder
            .get_face_by_topo_key(&entry.topo_key)
            .iter()
            .filter_map(|&id| builder.face_entry(id))
            .collect();
        // Stable: equal orders keep registration order.
        faces.sort_by(|a, b| b.order.cmp(&a.order));
        out.extend(faces.into_iter().map(|f| f.face_info.clone()));
    }
    out
}

/// Read-only room view shared by wall-loop rooms and floor rooms.
///
/// Implementors only decide how a room's faces map to wall sides; every
/// other view comes from the shared [`RoomCore`].
pub trait RoomInfo: Send + Sync {
    fn core(&self) -> &RoomCore;

    /// Wall id to the side of that wall facing into the room.
    fn walls_in_room_side(&self) -> &FxHashMap<StructureId, WallFaceType>;

    fn raw(&self) -> &RawRoomInfo {
        self.core().raw()
    }

    fn structure_face_infos(&self) -> &StructureFaceInfos {
        self.core().structure_face_infos()
    }

    fn split_curves(&self) -> &[Pline] {
        self.core().split_curves()
    }

    fn space_infos(&self) -> &[SpaceInfo] {
        self.core().space_infos()
    }

    fn floors(&self) -> &[SlabId] {
        self.core().floors()
    }

    fn ceilings(&self) -> &[SlabId] {
        self.core().ceilings()
    }

    fn structures(&self) -> &[StructureId] {
        self.core().structures()
    }

    fn faces(&self) -> &[FaceId] {
        self.core().faces()
    }

    fn beam_faces(&self) -> &[FaceId] {
        self.core().beam_faces()
    }

    fn path(&self) -> &[Path] {
        self.core().path()
    }

    fn geometry(&self) -> &Region2 {
        self.core().geometry()
    }

    /// Bounding box of the room outline.
    fn bounding_box(&self) -> Option<Aabb2> {
        Aabb2::from_loops(self.path())
    }

    /// Forces every cached view, including the wall-side map.
    fn warm(&self) {
        self.core().warm();
        let _ = self.walls_in_room_side();
    }
}
