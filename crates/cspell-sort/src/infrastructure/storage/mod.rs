//! Storage infrastructure: reading and writing the config file.
//!
//! The application layer only sees the [`ConfigStore`] trait.  Two
//! implementations exist:
//!
//! - [`FileStore`] – the real file system, with a crash-safe write
//!   (temporary file + rename).
//! - [`mock::MemoryStore`] – an in-memory map used by tests to run the
//!   whole pipeline without touching disk and to simulate write failures.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod file;
pub mod mock;

pub use file::FileStore;

/// Error type for config storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path does not name a file (e.g. it ends in `..`).
    #[error("not a file path: {}", .0.display())]
    InvalidPath(PathBuf),
}

/// Reads and writes whole config documents.
pub trait ConfigStore {
    /// Returns the full text of the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file is missing, unreadable, or
    /// not valid UTF-8.
    fn read(&self, path: &Path) -> Result<String, StorageError>;

    /// Replaces the document at `path` with `contents`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write cannot complete.  The previous
    /// contents must still be in place when this fails.
    fn write(&self, path: &Path, contents: &str) -> Result<(), StorageError>;
}
