//! CLI command implementations.

mod config;
mod languages;
mod notes;

pub use config::run_config;
pub use languages::run_languages;
pub use notes::run_notes;
