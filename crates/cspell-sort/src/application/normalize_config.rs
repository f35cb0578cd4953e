//! NormalizeConfigUseCase: one complete read → transform → write cycle.
//!
//! The main entry point is [`normalize_config`], which runs the five steps in
//! order and stops at the first failure:
//!
//! ```text
//! Load       store.read(path)                 → StorageError::Io
//! Extract    Document::parse + list_mut       → DocumentError::Parse / Schema
//! Normalize  cspell_sort_core::normalize      (cannot fail)
//! Serialize  Document::render_verified        → DocumentError::RenderMismatch
//! Save       store.write(path, text)          → StorageError::Io
//! ```
//!
//! The write is the very last step and only happens once the complete
//! normalized document exists in memory.  Any earlier failure leaves the file
//! exactly as it was.  If the rendered text equals the input no write is made
//! at all, so running the tool on a tidy file never touches its timestamp.

use std::path::PathBuf;

use cspell_sort_core::{normalize, Document, DocumentError, NormalizeReport};
use thiserror::Error;
use tracing::debug;

use crate::domain::{RunMode, RunSettings};
use crate::infrastructure::storage::{ConfigStore, StorageError};

/// Broad failure category, mirroring the IO / parse / schema taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file could not be read or written.
    Io,
    /// The file is not well-formed YAML.
    Parse,
    /// The field is missing, not a list, or cannot be rewritten in place.
    Schema,
    /// Check mode found a list that still needs normalizing.
    NotNormalized,
}

/// Error type for the normalize-config use case.
#[derive(Debug, Error)]
pub enum NormalizeConfigError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("{} is not normalized: `{field}` needs sorting or deduplication", path.display())]
    NotNormalized { path: PathBuf, field: String },
}

impl NormalizeConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Storage(_) => ErrorKind::Io,
            Self::Document(DocumentError::Parse(_)) => ErrorKind::Parse,
            Self::Document(_) => ErrorKind::Schema,
            Self::NotNormalized { .. } => ErrorKind::NotNormalized,
        }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOutcome {
    pub path: PathBuf,
    pub field: String,
    /// Entry count before normalization.
    pub before: usize,
    /// Entry count after normalization.
    pub after: usize,
    /// Whether normalization changed the document text.
    pub changed: bool,
    /// Whether the file was rewritten.
    pub written: bool,
}

impl NormalizeOutcome {
    pub fn duplicates_removed(&self) -> usize {
        self.before - self.after
    }
}

/// Normalizes the list field named in `settings` inside the file it names.
///
/// # Errors
///
/// - [`NormalizeConfigError::Storage`] if the file cannot be read or written.
/// - [`NormalizeConfigError::Document`] if the file is not valid YAML or the
///   field is absent or not a list.
/// - [`NormalizeConfigError::NotNormalized`] in [`RunMode::Check`] when the
///   file would change.
pub fn normalize_config<S>(
    store: &S,
    settings: &RunSettings,
) -> Result<NormalizeOutcome, NormalizeConfigError>
where
    S: ConfigStore + ?Sized,
{
    let source = store.read(&settings.path)?;
    let (text, report) = normalize_text(&source, &settings.field)?;
    let changed = text != source;

    let written = match (changed, settings.mode) {
        (false, _) => false,
        (true, RunMode::Check) => {
            return Err(NormalizeConfigError::NotNormalized {
                path: settings.path.clone(),
                field: settings.field.clone(),
            })
        }
        (true, RunMode::Write) => {
            store.write(&settings.path, &text)?;
            true
        }
    };
    debug!(path = %settings.path.display(), changed, written, "normalize run finished");

    Ok(NormalizeOutcome {
        path: settings.path.clone(),
        field: settings.field.clone(),
        before: report.before,
        after: report.after,
        changed,
        written,
    })
}

/// Runs the in-memory part of the pipeline on document text.
///
/// # Errors
///
/// Returns [`DocumentError`] if `source` does not parse, has no usable list
/// under `field`, or the normalized text does not read back as expected.
pub fn normalize_text(source: &str, field: &str) -> Result<(String, NormalizeReport), DocumentError> {
    let mut document = Document::parse(source)?;
    let list = document.list_mut(field)?;
    let report = normalize(list);
    Ok((document.render_verified()?, report))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::infrastructure::storage::mock::MemoryStore;

    const UNSORTED: &str = "version: \"0.2\"\nwords:\n  - tokio\n  - anyhow\n  - tokio\n";
    const SORTED: &str = "version: \"0.2\"\nwords:\n  - anyhow\n  - tokio\n";

    fn settings(mode: RunMode) -> RunSettings {
        RunSettings {
            mode,
            ..RunSettings::default()
        }
    }

    fn path() -> &'static Path {
        Path::new("cspell.yaml")
    }

    // ── Write mode ────────────────────────────────────────────────────────────

    #[test]
    fn test_write_mode_rewrites_unsorted_file() {
        // Arrange
        let store = MemoryStore::with_file("cspell.yaml", UNSORTED);

        // Act
        let outcome = normalize_config(&store, &settings(RunMode::Write)).unwrap();

        // Assert
        assert_eq!(store.contents(path()).as_deref(), Some(SORTED));
        assert_eq!(store.write_count(), 1);
        assert!(outcome.changed);
        assert!(outcome.written);
        assert_eq!(outcome.before, 3);
        assert_eq!(outcome.after, 2);
        assert_eq!(outcome.duplicates_removed(), 1);
    }

    #[test]
    fn test_write_mode_skips_write_when_already_normalized() {
        let store = MemoryStore::with_file("cspell.yaml", SORTED);
        let outcome = normalize_config(&store, &settings(RunMode::Write)).unwrap();
        assert!(!outcome.changed);
        assert!(!outcome.written);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let store = MemoryStore::with_file("cspell.yaml", UNSORTED);
        normalize_config(&store, &settings(RunMode::Write)).unwrap();
        let second = normalize_config(&store, &settings(RunMode::Write)).unwrap();
        assert!(!second.changed);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_custom_field_is_normalized() {
        // Arrange
        let store = MemoryStore::with_file("cspell.yaml", "flagWords: [zz, aa]\nwords: [b, a]\n");
        let settings = RunSettings {
            field: "flagWords".to_string(),
            ..RunSettings::default()
        };

        // Act
        normalize_config(&store, &settings).unwrap();

        // Assert: only the requested field changed
        assert_eq!(
            store.contents(path()).as_deref(),
            Some("flagWords: [aa, zz]\nwords: [b, a]\n")
        );
    }

    // ── Check mode ────────────────────────────────────────────────────────────

    #[test]
    fn test_check_mode_passes_on_normalized_file() {
        let store = MemoryStore::with_file("cspell.yaml", SORTED);
        let outcome = normalize_config(&store, &settings(RunMode::Check)).unwrap();
        assert!(!outcome.changed);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_check_mode_fails_on_unsorted_file_without_writing() {
        // Arrange
        let store = MemoryStore::with_file("cspell.yaml", UNSORTED);

        // Act
        let err = normalize_config(&store, &settings(RunMode::Check)).unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::NotNormalized);
        assert_eq!(store.contents(path()).as_deref(), Some(UNSORTED));
        assert_eq!(store.write_count(), 0);
    }

    // ── Failures leave the source untouched ───────────────────────────────────

    #[test]
    fn test_missing_file_is_io_error() {
        let store = MemoryStore::new();
        let err = normalize_config(&store, &settings(RunMode::Write)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_missing_field_is_schema_error_and_file_untouched() {
        // Arrange
        let original = "version: \"0.2\"\nlanguage: en\n";
        let store = MemoryStore::with_file("cspell.yaml", original);

        // Act
        let err = normalize_config(&store, &settings(RunMode::Write)).unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert_eq!(store.contents(path()).as_deref(), Some(original));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let store = MemoryStore::with_file("cspell.yaml", "words: [a, b\n");
        let err = normalize_config(&store, &settings(RunMode::Write)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_unsupported_layout_is_schema_error() {
        let store = MemoryStore::with_file("cspell.yaml", "words: [b,\n  a]\n");
        let err = normalize_config(&store, &settings(RunMode::Write)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert!(err.to_string().contains("cannot be edited in place"));
    }

    #[test]
    fn test_dropping_anchored_duplicate_is_refused_and_file_untouched() {
        // Arrange: removing the second `a` would orphan the `*x` alias
        let original = "words: [a, &x a]\nother: *x\n";
        let store = MemoryStore::with_file("cspell.yaml", original);

        // Act
        let err = normalize_config(&store, &settings(RunMode::Write)).unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert!(err.to_string().contains("could not be rewritten safely"));
        assert_eq!(store.contents(path()).as_deref(), Some(original));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_write_failure_is_io_error_and_original_kept() {
        let store = MemoryStore::with_file("cspell.yaml", UNSORTED).failing_writes();
        let err = normalize_config(&store, &settings(RunMode::Write)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(store.contents(path()).as_deref(), Some(UNSORTED));
    }

    // ── normalize_text ────────────────────────────────────────────────────────

    #[test]
    fn test_normalize_text_moves_comment_with_first_item() {
        let source = "words:\n  # about zeta\n  - zeta\n  # about alpha\n  - alpha\n";
        let (text, _) = normalize_text(source, "words").unwrap();
        assert_eq!(
            text,
            "words:\n  # about alpha\n  - alpha\n  # about zeta\n  - zeta\n"
        );
    }

    #[test]
    fn test_normalize_text_returns_rendered_document_and_report() {
        let (text, report) = normalize_text(UNSORTED, "words").unwrap();
        assert_eq!(text, SORTED);
        assert_eq!(report.duplicates_removed(), 1);
    }

    #[test]
    fn test_not_normalized_message_names_file_and_field() {
        let err = NormalizeConfigError::NotNormalized {
            path: PathBuf::from("cspell.yaml"),
            field: "words".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cspell.yaml is not normalized: `words` needs sorting or deduplication"
        );
    }
}
