//! Domain layer for cspell-sort.
//!
//! Holds the plain settings struct that describes one run.  Populating it from
//! CLI flags or environment variables is `main.rs`'s job.

pub mod settings;

pub use settings::{RunMode, RunSettings, DEFAULT_CONFIG_FILE, DEFAULT_FIELD};
