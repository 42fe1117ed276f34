pub mod filter_generator;
pub mod index_manager;
pub mod menu;

pub use menu::{Console, GenerateOutcome};
