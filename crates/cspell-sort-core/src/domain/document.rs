//! YAML document entity.
//!
//! A [`Document`] keeps the original text together with the value tree that
//! `serde_yaml` parsed out of it.  The value tree answers schema questions
//! ("is `words` a list of scalars?"); the text is what gets written back.
//!
//! # Lifecycle
//!
//! ```text
//! Document::parse(text)         -- fails with DocumentError::Parse
//!   └─ list_mut("words")        -- fails with Schema / UnsupportedLayout
//!        └─ normalize(list)     -- reorders entries in place
//!   └─ render()                 -- original text with the list span replaced
//!   └─ render_verified()        -- render, then read back; fails with RenderMismatch
//! ```
//!
//! Everything outside the extracted list's byte span is copied through
//! unchanged, so unrelated keys, comments, and blank lines survive
//! byte-for-byte.

use std::fmt;
use std::ops::Range;

use serde_yaml::Value;
use thiserror::Error;
use tracing::debug;

use super::locate::{locate_list, LayoutIssue};
use super::word_list::WordList;

/// Why a field could not be used as a word list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaProblem {
    #[error("cannot be looked up because the document root is not a mapping")]
    RootNotMapping,

    #[error("is missing from the top level of the document")]
    Missing,

    #[error("is not a list (found {0})")]
    NotAList(&'static str),

    #[error("has a non-scalar entry at index {0}")]
    NonScalarEntry(usize),
}

/// Errors raised while parsing a document or extracting its word list.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text is not well-formed YAML.
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The field is absent or does not hold a list of scalars.
    #[error("field `{field}` {problem}")]
    Schema {
        field: String,
        #[source]
        problem: SchemaProblem,
    },

    /// The field is a valid list, but written in a form that cannot be edited
    /// without reformatting the document.
    #[error("field `{field}` cannot be edited in place: {issue}")]
    UnsupportedLayout {
        field: String,
        #[source]
        issue: LayoutIssue,
    },

    /// The rendered text does not read back as the same document with the
    /// normalized list, e.g. because a dropped duplicate carried an anchor.
    #[error("field `{field}` could not be rewritten safely: {reason}")]
    RenderMismatch { field: String, reason: String },
}

#[derive(Debug, Clone)]
struct ExtractedList {
    span: Range<usize>,
    list: WordList,
}

/// A parsed YAML document that can be rendered back without losing formatting.
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    root: Value,
    extracted: Option<ExtractedList>,
}

impl Document {
    /// Parses `source` into a document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] if `source` is not well-formed YAML.
    pub fn parse(source: impl Into<String>) -> Result<Self, DocumentError> {
        let source = source.into();
        let root: Value = serde_yaml::from_str(&source)?;
        Ok(Self {
            source,
            root,
            extracted: None,
        })
    }

    /// The text the document was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the list stored under the top-level key `field`, ready to be
    /// edited in place.
    ///
    /// The first call cuts the list out of the source text; later calls with
    /// the same field return the same list.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::Schema`] if the field is absent, not a list, or holds
    ///   a nested mapping or sequence.
    /// - [`DocumentError::UnsupportedLayout`] if the list cannot be mapped onto
    ///   the source text, or a different field was already extracted.
    pub fn list_mut(&mut self, field: &str) -> Result<&mut WordList, DocumentError> {
        if self.extracted.is_none() {
            let extracted = self.extract(field)?;
            self.extracted = Some(extracted);
        }
        match self.extracted.as_mut() {
            Some(extracted) if extracted.list.field() == field => Ok(&mut extracted.list),
            _ => Err(DocumentError::UnsupportedLayout {
                field: field.to_string(),
                issue: LayoutIssue::AlreadyExtracted,
            }),
        }
    }

    /// Renders the whole document, including any edits to the extracted list.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Renders the document and parses the result again before returning it.
    ///
    /// The re-read text must hold exactly the extracted list's current values
    /// under its field, and every other top-level key must be unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::RenderMismatch`] if the rendered text does not
    /// parse or reads back differently.
    pub fn render_verified(&self) -> Result<String, DocumentError> {
        let text = self.render();
        let extracted = match &self.extracted {
            Some(extracted) => extracted,
            None => return Ok(text),
        };
        let field = extracted.list.field();
        let mismatch = |reason: String| DocumentError::RenderMismatch {
            field: field.to_string(),
            reason,
        };

        let reread = Document::parse(text.as_str()).map_err(|e| mismatch(e.to_string()))?;
        let values = reread
            .entry_values(field)
            .map_err(|e| mismatch(e.to_string()))?;
        if !values.iter().map(String::as_str).eq(extracted.list.values()) {
            return Err(mismatch(format!(
                "read back {} entries that differ from the normalized list",
                values.len()
            )));
        }
        if without_field(&reread.root, field) != without_field(&self.root, field) {
            return Err(mismatch("other keys changed".to_string()));
        }

        debug!(field, bytes = text.len(), "rendered text reads back");
        Ok(text)
    }

    fn extract(&self, field: &str) -> Result<ExtractedList, DocumentError> {
        let values = self.entry_values(field)?;
        let layout_error = |issue| DocumentError::UnsupportedLayout {
            field: field.to_string(),
            issue,
        };

        let located = locate_list(&self.source, field).map_err(layout_error)?;
        let span = located.start..located.end;
        let (entries, style) = located.into_entries(values).map_err(layout_error)?;
        debug!(field, entries = entries.len(), "extracted word list");

        Ok(ExtractedList {
            span,
            list: WordList::new(field, entries, style),
        })
    }

    /// Reads the scalar text of every entry under `field` from the value tree.
    fn entry_values(&self, field: &str) -> Result<Vec<String>, DocumentError> {
        let schema = |problem| DocumentError::Schema {
            field: field.to_string(),
            problem,
        };

        let mapping = self
            .root
            .as_mapping()
            .ok_or_else(|| schema(SchemaProblem::RootNotMapping))?;
        let node = mapping
            .get(field)
            .ok_or_else(|| schema(SchemaProblem::Missing))?;
        let items = match node {
            Value::Sequence(items) => items,
            other => return Err(schema(SchemaProblem::NotAList(kind_name(other)))),
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                scalar_text(item).ok_or_else(|| schema(SchemaProblem::NonScalarEntry(index)))
            })
            .collect()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.extracted {
            None => f.write_str(&self.source),
            Some(extracted) => {
                f.write_str(&self.source[..extracted.span.start])?;
                f.write_str(&extracted.list.render())?;
                f.write_str(&self.source[extracted.span.end..])
            }
        }
    }
}

fn without_field(root: &Value, field: &str) -> Value {
    let mut root = root.clone();
    if let Some(mapping) = root.as_mapping_mut() {
        mapping.remove(field);
    }
    root
}

/// Textual form of a scalar, as used for ordering.  `None` for collections.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
