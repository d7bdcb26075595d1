pub mod donor_index;
pub mod registry;
pub mod schedule;

pub use donor_index::*;
pub use registry::*;
pub use schedule::*;
