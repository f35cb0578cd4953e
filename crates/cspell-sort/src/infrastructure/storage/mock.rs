//! In-memory config store for unit testing.
//!
//! Lets tests run the full normalize pipeline without touching disk, count
//! how many writes happened, and simulate a failing disk.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{ConfigStore, StorageError};

/// A [`ConfigStore`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<PathBuf, String>>,
    write_count: Mutex<u32>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a single file.
    pub fn with_file(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .files
            .lock()
            .expect("lock poisoned")
            .insert(path.into(), contents.into());
        store
    }

    /// Makes every subsequent [`ConfigStore::write`] fail with a permission error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Current contents of `path`, if any.
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.lock().expect("lock poisoned").get(path).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> u32 {
        *self.write_count.lock().expect("lock poisoned")
    }
}

impl ConfigStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<String, StorageError> {
        self.contents(path).ok_or_else(|| StorageError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file in memory store"),
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "simulated write failure"),
            });
        }
        self.files
            .lock()
            .expect("lock poisoned")
            .insert(path.to_path_buf(), contents.to_string());
        *self.write_count.lock().expect("lock poisoned") += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_returns_seeded_contents() {
        let store = MemoryStore::with_file("cspell.yaml", "words: []\n");
        assert_eq!(store.read(Path::new("cspell.yaml")).unwrap(), "words: []\n");
    }

    #[test]
    fn test_read_unknown_path_is_not_found() {
        let store = MemoryStore::new();
        let err = store.read(Path::new("missing.yaml")).unwrap_err();
        assert!(matches!(
            err,
            StorageError::Io { ref source, .. } if source.kind() == io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn test_write_updates_contents_and_count() {
        let store = MemoryStore::new();
        store.write(Path::new("a.yaml"), "words: [a]\n").unwrap();
        assert_eq!(store.contents(Path::new("a.yaml")).as_deref(), Some("words: [a]\n"));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_failing_writes_leave_contents_untouched() {
        let store = MemoryStore::with_file("a.yaml", "original").failing_writes();
        assert!(store.write(Path::new("a.yaml"), "changed").is_err());
        assert_eq!(store.contents(Path::new("a.yaml")).as_deref(), Some("original"));
        assert_eq!(store.write_count(), 0);
    }
}
