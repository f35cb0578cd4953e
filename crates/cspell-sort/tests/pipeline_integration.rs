//! Integration tests for the normalize-config pipeline against real files.
//!
//! Each test works in its own temporary directory through [`FileStore`], so the
//! crash-safe write and the "untouched on failure" guarantees are exercised on
//! an actual file system.

use std::fs;
use std::path::PathBuf;

use cspell_sort::application::{normalize_config, ErrorKind};
use cspell_sort::domain::{RunMode, RunSettings};
use cspell_sort::infrastructure::FileStore;
use tempfile::TempDir;

const CONFIG: &str = "\
version: \"0.2\"
# Project words, keep alphabetical
words:
  - ratatui
  - Tokio
  - anyhow  # errors
  - ratatui
ignorePaths:
  - target
";

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("cspell.yaml");
    fs::write(&path, contents).expect("fixture write");
    path
}

fn settings_for(path: PathBuf, mode: RunMode) -> RunSettings {
    RunSettings {
        path,
        mode,
        ..RunSettings::default()
    }
}

#[test]
fn test_run_rewrites_file_with_sorted_unique_words() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, CONFIG);

    // Act
    let outcome = normalize_config(&FileStore::new(), &settings_for(path.clone(), RunMode::Write))
        .expect("normalization must succeed");

    // Assert
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "\
version: \"0.2\"
# Project words, keep alphabetical
words:
  - Tokio
  - anyhow  # errors
  - ratatui
ignorePaths:
  - target
"
    );
    assert!(outcome.written);
    assert_eq!(outcome.duplicates_removed(), 1);
}

#[test]
fn test_run_twice_leaves_file_stable() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, CONFIG);
    let settings = settings_for(path.clone(), RunMode::Write);

    normalize_config(&FileStore::new(), &settings).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    let second_outcome = normalize_config(&FileStore::new(), &settings).unwrap();

    assert!(!second_outcome.written);
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn test_missing_field_leaves_file_untouched() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let original = "version: \"0.2\"\nlanguage: en\n";
    let path = write_config(&dir, original);

    // Act
    let err = normalize_config(&FileStore::new(), &settings_for(path.clone(), RunMode::Write))
        .unwrap_err();

    // Assert
    assert_eq!(err.kind(), ErrorKind::Schema);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_parse_error_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let original = "words: [b, a\n";
    let path = write_config(&dir, original);

    let err = normalize_config(&FileStore::new(), &settings_for(path.clone(), RunMode::Write))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cspell.yaml");

    let err = normalize_config(&FileStore::new(), &settings_for(path.clone(), RunMode::Write))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(!path.exists(), "a failed run must not create the file");
}

#[test]
fn test_check_mode_never_writes() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, CONFIG);

    let err = normalize_config(&FileStore::new(), &settings_for(path.clone(), RunMode::Check))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotNormalized);
    assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG);
}

#[test]
fn test_no_temporary_file_left_after_run() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, CONFIG);

    normalize_config(&FileStore::new(), &settings_for(path, RunMode::Write)).unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("cspell.yaml")]);
}
