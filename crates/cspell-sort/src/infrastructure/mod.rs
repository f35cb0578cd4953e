//! Infrastructure layer for cspell-sort.
//!
//! Everything that touches the file system lives here.
//!
//! # What does NOT belong here?
//!
//! - YAML handling (that is `cspell-sort-core`)
//! - Deciding whether to write (that is the application layer)
//! - Flag parsing (that is done in `main.rs`)

pub mod storage;

pub use storage::{ConfigStore, FileStore, StorageError};
