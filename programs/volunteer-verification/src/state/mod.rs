pub mod records;
pub mod registry;

pub use records::*;
pub use registry::*;
