use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;

use crate::geometry::Pline;
use crate::math::Point2;
use crate::scene::{FaceId, StructureId, WallFaceType};

use super::assembler::{LayerSnapshot, RoomCore, RoomInfo};
use super::raw::RawRoomInfo;

/// A room bounded by a closed loop of wall faces.
///
/// Wall sides come from every structure linked to a room face, since a
/// face on a wall junction can touch several walls.
#[derive(Debug)]
pub struct WallLoopInfo {
    core: RoomCore,
    wall_faces: OnceLock<Vec<FaceId>>,
    walls_in_room_side: OnceLock<FxHashMap<StructureId, WallFaceType>>,
    wall_sides: OnceLock<Vec<(StructureId, Vec<WallFaceType>)>>,
    interior_walls: OnceLock<Vec<StructureId>>,
    bound_walls: OnceLock<Vec<StructureId>>,
}

impl WallLoopInfo {
    #[must_use]
    pub fn new(snapshot: Arc<LayerSnapshot>, raw: RawRoomInfo) -> Self {
        Self {
            core: RoomCore::new(snapshot, raw),
            wall_faces: OnceLock::new(),
            walls_in_room_side: OnceLock::new(),
            wall_sides: OnceLock::new(),
            interior_walls: OnceLock::new(),
            bound_walls: OnceLock::new(),
        }
    }

    /// The room's outer boundary as recorded.
    #[must_use]
    pub fn wall_loop(&self) -> &Pline {
        &self.core.raw().outline
    }

    /// Tessellated outer boundary, counter-clockwise.
    #[must_use]
    pub fn loop_geom(&self) -> &[Point2] {
        &self.core.geometry().outer
    }

    /// Room faces linked to at least one wall, in loop order.
    pub fn wall_faces(&self) -> &[FaceId] {
        self.wall_faces.get_or_init(|| {
            let layer = self.core.layer();
            self.core
                .faces()
                .iter()
                .copied()
                .filter(|&face_id| {
                    layer.face(face_id).is_ok_and(|face| {
                        face.link_structures
                            .iter()
                            .any(|&s| layer.structure(s).is_ok_and(|s| s.is_wall()))
                    })
                })
                .collect()
        })
    }

    /// Walls with both a left and a right face in the room.
    pub fn interior_walls(&self) -> &[StructureId] {
        self.interior_walls.get_or_init(|| {
            self.wall_sides()
                .iter()
                .filter(|(_, sides)| is_interior(sides))
                .map(|(id, _)| *id)
                .collect()
        })
    }

    /// Walls facing the room from one side only.
    pub fn bound_walls(&self) -> &[StructureId] {
        self.bound_walls.get_or_init(|| {
            self.wall_sides()
                .iter()
                .filter(|(_, sides)| !is_interior(sides))
                .map(|(id, _)| *id)
                .collect()
        })
    }

    /// Wall face following `face` in its own loop, wrapping around.
    ///
    /// `None` if `face` is not a wall face of this room or is alone in its
    /// loop.
    #[must_use]
    pub fn next_wall_face(&self, face: FaceId) -> Option<FaceId> {
        self.neighbour(face, 1)
    }

    /// Wall face preceding `face` in its own loop, wrapping around.
    #[must_use]
    pub fn prev_wall_face(&self, face: FaceId) -> Option<FaceId> {
        self.neighbour(face, -1)
    }

    fn neighbour(&self, face: FaceId, step: isize) -> Option<FaceId> {
        let wall_faces = self.wall_faces();
        let ring: Vec<FaceId> = self
            .core
            .structure_face_infos()
            .loop_of(face)?
            .iter()
            .map(|info| info.face_id)
            .filter(|id| wall_faces.contains(id))
            .collect();
        if ring.len() < 2 {
            return None;
        }
        let i = ring.iter().position(|&id| id == face)?;
        #[allow(clippy::cast_possible_wrap)]
        let n = ring.len() as isize;
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        let j = (i as isize + step).rem_euclid(n) as usize;
        Some(ring[j])
    }

    /// Every (wall, side) seen on a wall face, grouped by wall in
    /// first-seen order.
    fn wall_sides(&self) -> &[(StructureId, Vec<WallFaceType>)] {
        self.wall_sides.get_or_init(|| {
            let mut out: Vec<(StructureId, Vec<WallFaceType>)> = Vec::new();
            self.for_each_wall_side(|wall, side| {
                match out.iter_mut().find(|(id, _)| *id == wall) {
                    Some((_, sides)) => {
                        if !sides.contains(&side) {
                            sides.push(side);
                        }
                    }
                    None => out.push((wall, vec![side])),
                }
            });
            out
        })
    }

    fn for_each_wall_side(&self, mut f: impl FnMut(StructureId, WallFaceType)) {
        let layer = self.core.layer();
        for &face_id in self.wall_faces() {
            let Ok(face) = layer.face(face_id) else {
                continue;
            };
            for &structure_id in &face.link_structures {
                let Ok(structure) = layer.structure(structure_id) else {
                    tracing::warn!(face = ?face_id, structure = ?structure_id, "linked structure missing from layer");
                    continue;
                };
                if let Some(side) = structure.as_wall().and_then(|w| w.face_type(face_id)) {
                    f(structure_id, side);
                }
            }
        }
    }
}

fn is_interior(sides: &[WallFaceType]) -> bool {
    sides.contains(&WallFaceType::Left) && sides.contains(&WallFaceType::Right)
}

impl RoomInfo for WallLoopInfo {
    fn core(&self) -> &RoomCore {
        &self.core
    }

    /// Later faces overwrite earlier ones for the same wall.
    fn walls_in_room_side(&self) -> &FxHashMap<StructureId, WallFaceType> {
        self.walls_in_room_side.get_or_init(|| {
            let mut map = FxHashMap::default();
            self.for_each_wall_side(|wall, side| {
                map.insert(wall, side);
            });
            map
        })
    }

    fn warm(&self) {
        self.core.warm();
        let _ = self.walls_in_room_side();
        let _ = self.interior_walls();
        let _ = self.bound_walls();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::room::test_fixtures::{segment, square_room_scene, wall_loop_raw};
    use crate::scene::{FaceData, StructureData, StructureKind};

    fn info(scene: crate::room::test_fixtures::Scene) -> WallLoopInfo {
        let raw = wall_loop_raw();
        WallLoopInfo::new(Arc::new(scene.into_snapshot()), raw)
    }

    #[test]
    fn walls_in_room_side_maps_each_wall() {
        let scene = square_room_scene();
        let walls = scene.walls.clone();
        let partition = scene.partition;
        let room = info(scene);

        let sides = room.walls_in_room_side();
        assert_eq!(sides.len(), 5);
        for wall in &walls {
            assert_eq!(sides[wall], WallFaceType::Left);
        }
        // Right face comes last in the hole loop.
        assert_eq!(sides[&partition], WallFaceType::Right);
    }

    #[test]
    fn interior_and_bound_walls() {
        let scene = square_room_scene();
        let walls = scene.walls.clone();
        let partition = scene.partition;
        let room = info(scene);

        assert_eq!(room.interior_walls(), &[partition]);
        assert_eq!(room.bound_walls(), walls.as_slice());
    }

    #[test]
    fn linked_walls_count_for_wall_loops() {
        let mut scene = square_room_scene();
        // A face owned by a column but also touching wall 0.
        let column = scene.layer.add_structure(StructureData {
            name: "column".into(),
            kind: StructureKind::Column,
        });
        let shared = scene
            .layer
            .add_face(FaceData::new(segment(1.0, 0.0, 1.5, 0.0)).owned_by(column).linked_to(scene.walls[0]));
        if let StructureKind::Wall(wall) = &mut scene.layer.structure_mut(scene.walls[0]).unwrap().kind {
            wall.faces.push((shared, WallFaceType::Top));
        }
        scene.builder.add_face(shared, "e0".into(), -1);
        let wall0 = scene.walls[0];
        let room = info(scene);

        assert!(room.wall_faces().contains(&shared));
        // Lowest order sorts last, so its side wins for wall 0.
        assert_eq!(room.walls_in_room_side()[&wall0], WallFaceType::Top);
    }

    #[test]
    fn faces_without_walls_are_not_wall_faces() {
        let mut scene = square_room_scene();
        let column = scene.layer.add_structure(StructureData {
            name: "column".into(),
            kind: StructureKind::Column,
        });
        let column_face = scene
            .layer
            .add_face(FaceData::new(segment(0.0, 1.0, 0.0, 1.5)).owned_by(column));
        scene.builder.add_face(column_face, "e3".into(), 0);
        let room = info(scene);

        assert!(room.faces().contains(&column_face));
        assert!(!room.wall_faces().contains(&column_face));
    }

    #[test]
    fn neighbours_wrap_within_their_loop() {
        let scene = square_room_scene();
        let inner = scene.inner_faces.clone();
        let [left, right] = scene.partition_faces;
        let room = info(scene);

        assert_eq!(room.next_wall_face(inner[0]), Some(inner[1]));
        assert_eq!(room.next_wall_face(inner[3]), Some(inner[0]));
        assert_eq!(room.prev_wall_face(inner[0]), Some(inner[3]));
        assert_eq!(room.next_wall_face(left), Some(right));
        assert_eq!(room.prev_wall_face(left), Some(right));

        let stranger = FaceId::default();
        assert_eq!(room.next_wall_face(stranger), None);
    }

    #[test]
    fn loop_accessors() {
        let room = info(square_room_scene());
        assert_eq!(room.wall_loop().vertices.len(), 4);
        assert_eq!(room.loop_geom().len(), 4);
        let bb = room.bounding_box().unwrap();
        assert!((bb.width() - 4.0).abs() < 1e-12);
    }
}
