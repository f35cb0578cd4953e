//! Application layer for cspell-sort.
//!
//! Knows *what* a run does (read, normalize, decide whether to write) and
//! delegates *how* to the storage trait and to `cspell-sort-core`.

pub mod normalize_config;

pub use normalize_config::{
    normalize_config, normalize_text, ErrorKind, NormalizeConfigError, NormalizeOutcome,
};
