pub mod config;
pub mod csg;
pub mod error;
pub mod geometry;
pub mod math;
pub mod query;
pub mod room;
pub mod scene;

pub use config::TopologyConfig;
pub use error::{ArchError, Result};
