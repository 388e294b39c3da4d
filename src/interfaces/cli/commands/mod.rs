//! CLI command implementations

mod config_gen;
mod search;

pub use config_gen::config_generate;
pub use search::{SearchOptions, search_repos};
