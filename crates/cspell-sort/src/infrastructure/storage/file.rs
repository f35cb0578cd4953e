//! File-system backed [`ConfigStore`].
//!
//! # Crash-safe writes (for beginners)
//!
//! Writing straight into `cspell.yaml` with `std::fs::write` truncates the
//! file first.  If the process dies halfway through, the user is left with a
//! half-written config.  Instead we:
//!
//! 1. write the new text to a uniquely named `.cspell.yaml.XXXXXX.tmp` in the
//!    same directory, created exclusively so an existing file is never
//!    truncated or followed through a symlink,
//! 2. flush it to disk (`sync_all`),
//! 3. copy the original file's permissions onto it,
//! 4. `rename` it over the original.
//!
//! On the same file system a rename replaces the target in one step, so a
//! reader sees either the old file or the new one, never a mix.  Symlinks are
//! resolved first so the link itself is kept and its target is replaced.
//! If any step fails the temporary file is deleted when it is dropped.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use super::{ConfigStore, StorageError};

/// Reads and writes config files on the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigStore for FileStore {
    fn read(&self, path: &Path) -> Result<String, StorageError> {
        let contents = fs::read_to_string(path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = contents.len(), "read config");
        Ok(contents)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), StorageError> {
        let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let mut tmp = temp_file_for(&target)?;
        let io = |source| StorageError::Io {
            path: target.clone(),
            source,
        };

        tmp.write_all(contents.as_bytes()).map_err(io)?;
        tmp.as_file().sync_all().map_err(io)?;

        // Keep the original mode bits; a fresh file would get 0600.
        if let Ok(metadata) = fs::metadata(&target) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(io)?;
        }

        tmp.persist(&target).map_err(|e| io(e.error))?;
        debug!(path = %target.display(), bytes = contents.len(), "wrote config");
        Ok(())
    }
}

/// Creates `dir/.name.XXXXXX.tmp` next to `target`.
fn temp_file_for(target: &Path) -> Result<NamedTempFile, StorageError> {
    let name = target
        .file_name()
        .ok_or_else(|| StorageError::InvalidPath(target.to_path_buf()))?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut prefix = OsString::from(".");
    prefix.push(name);
    prefix.push(".");

    Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|source| StorageError::Io {
            path: dir.to_path_buf(),
            source,
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
