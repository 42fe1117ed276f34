pub mod templates;
pub mod types;

pub use types::{cli, Config, Site, Variant, DEFAULT_INDEX_FILE};
