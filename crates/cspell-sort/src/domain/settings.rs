//! Run settings.
//!
//! [`RunSettings`] is the single source of truth for one invocation: which
//! file to rewrite, which top-level list to normalize, and whether to write at
//! all.  The defaults reproduce the classic behavior of rewriting `words` in
//! `cspell.yaml` in the current directory.
//!
//! Keeping this a plain struct (no globals, no environment reads) lets tests
//! point the pipeline at a temporary file.

use std::path::PathBuf;

/// Config file used when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "cspell.yaml";

/// List field used when no field name is given.
pub const DEFAULT_FIELD: &str = "words";

/// What to do once the normalized document is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Write the normalized document back if it differs.
    #[default]
    Write,
    /// Never write; fail if the document is not already normalized.
    Check,
}

/// All settings for one normalization run.
///
/// # Example
///
/// ```rust
/// use cspell_sort::domain::{RunMode, RunSettings};
///
/// let settings = RunSettings::default();
/// assert_eq!(settings.path.to_str(), Some("cspell.yaml"));
/// assert_eq!(settings.field, "words");
/// assert_eq!(settings.mode, RunMode::Write);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Path of the YAML file, read and overwritten in place.
    pub path: PathBuf,
    /// Top-level key holding the list to normalize.
    pub field: String,
    pub mode: RunMode,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            field: DEFAULT_FIELD.to_string(),
            mode: RunMode::Write,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
