//! Plane/polygon CSG kernel.
//!
//! Polygons are classified against planes with a fixed tolerance
//! ([`EPSILON`]) and split into front/back fragments; a BSP tree built on
//! the splitter provides solid union, subtraction and intersection.

mod bsp;
mod plane;
mod polygon;
mod solid;
mod split;
mod vertex;

pub use bsp::Node;
pub use plane::{Plane, Side};
pub use polygon::{MaterialId, Polygon, PolygonTag};
pub use solid::Csg;
pub use split::{PolygonPlacement, SplitPolygons};
pub use vertex::Vertex;

/// Tolerance for classifying points against a plane.
pub const EPSILON: f64 = 1e-5;
