pub mod pline;
pub mod region;

pub use pline::{Pline, PlineVertex};
pub use region::Region2;
