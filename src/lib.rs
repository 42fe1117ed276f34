pub mod config;
pub mod logging;
pub mod processor;
pub mod utils;

pub use config::{Config, Site, Variant};
pub use processor::{Console, GenerateOutcome};
