//! The word list entity: an ordered sequence of scalar entries cut out of a
//! YAML document, ready to be reordered and rendered back.
//!
//! Every [`Entry`] carries two things:
//!
//! - its **value**, the scalar text as the YAML parser understands it
//!   (quotes removed, escapes resolved), used for ordering and equality;
//! - its **source**, the exact bytes it occupied in the file, including a
//!   trailing comment and any comment lines directly above it.
//!
//! Moving an entry moves its source with it, so per-item comments follow the
//! word they describe.

/// A single word in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) value: String,
    pub(crate) source: String,
}

impl Entry {
    /// Scalar value used for ordering and deduplication.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Original source text of the entry, comments included.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// How the list was written in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStyle {
    /// One `- item` per line.
    Block {
        /// `"\n"` or `"\r\n"`, taken from the document.
        line_ending: String,
        /// Whether the last line of the list ended with a line break.
        final_newline: bool,
    },
    /// `[a, b, c]` on a single line.
    Flow {
        /// Everything from `[` up to the first entry.
        open: String,
        /// Text between two entries, e.g. `", "`.
        separator: String,
        /// Everything from the end of the last entry through `]`.
        close: String,
    },
}

/// A named list field extracted from a [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    pub(crate) field: String,
    pub(crate) entries: Vec<Entry>,
    pub(crate) style: ListStyle,
}

impl WordList {
    pub(crate) fn new(field: &str, entries: Vec<Entry>, style: ListStyle) -> Self {
        Self {
            field: field.to_string(),
            entries,
            style,
        }
    }

    /// Builds a flow-style list straight from word values.
    ///
    /// Each word is used verbatim as its own source, so this is meant for
    /// plain words (tests, benchmarks) rather than arbitrary YAML scalars.
    pub fn from_words<I, S>(field: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = words
            .into_iter()
            .map(|word| {
                let value = word.into();
                Entry {
                    source: value.clone(),
                    value,
                }
            })
            .collect();
        Self::new(
            field,
            entries,
            ListStyle::Flow {
                open: "[".to_string(),
                separator: ", ".to_string(),
                close: "]".to_string(),
            },
        )
    }

    /// Name of the top-level key this list lives under.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterates over the entry values in their current order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn style(&self) -> &ListStyle {
        &self.style
    }

    /// Renders the list back to the text that replaces its original span.
    pub fn render(&self) -> String {
        match &self.style {
            ListStyle::Block {
                line_ending,
                final_newline,
            } => {
                let mut out = String::new();
                for entry in &self.entries {
                    out.push_str(&entry.source);
                    // Only the entry that was last in the file can lack a break.
                    if !entry.source.ends_with('\n') {
                        out.push_str(line_ending);
                    }
                }
                if !final_newline && out.ends_with(line_ending.as_str()) {
                    out.truncate(out.len() - line_ending.len());
                }
                out
            }
            ListStyle::Flow {
                open,
                separator,
                close,
            } => {
                let body: Vec<&str> = self.entries.iter().map(Entry::source).collect();
                format!("{open}{}{close}", body.join(separator))
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
