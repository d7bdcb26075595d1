pub mod initialize;
pub mod pause;
pub mod register_charity;
pub mod transfer_ownership;
pub mod unpause;
pub mod update_charity_status;
pub mod verify_application;
pub mod verify_hours;

pub use initialize::*;
pub use pause::*;
pub use register_charity::*;
pub use transfer_ownership::*;
pub use unpause::*;
pub use update_charity_status::*;
pub use verify_application::*;
pub use verify_hours::*;
