pub mod add_charity;
pub mod cancel_schedule;
pub mod create_schedule;
pub mod emit_donor_schedules;
pub mod execute_distribution;
pub mod execute_distribution_batch;
pub mod initialize_registry;
pub mod remove_charity;
pub mod set_token_price;
pub mod transfer_ownership;

pub use add_charity::*;
pub use cancel_schedule::*;
pub use create_schedule::*;
pub use emit_donor_schedules::*;
pub use execute_distribution::*;
pub use execute_distribution_batch::*;
pub use initialize_registry::*;
pub use remove_charity::*;
pub use set_token_price::*;
pub use transfer_ownership::*;
