//! Source scanner that finds where a top-level list field lives in the text.
//!
//! The YAML parser tells us *what* the list contains but not *where* each
//! item sits in the file.  This module answers the second question with a
//! line-oriented scan that understands the two layouts cspell configs use in
//! practice:
//!
//! ```yaml
//! words:            # block sequence
//!   - alpha         # one entry per line, comments allowed
//!   - beta
//! ignoreWords: [a, b]  # flow sequence on a single line
//! ```
//!
//! The result is a byte span plus one source chunk per entry.  The caller
//! cross-checks the chunk count against the parsed value before trusting it.
//!
//! # What counts as part of an entry?
//!
//! - The `- item` line and any continuation lines indented deeper than the dash.
//! - Blank and comment lines between the previous entry and this one.
//! - For the first entry, comment lines between the key and the dash.
//!
//! Blank lines directly under the key and trivia below the last entry stay
//! where they are.

use thiserror::Error;
use tracing::debug;

use super::word_list::{Entry, ListStyle};

/// Reasons the scanner could not map a list onto the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutIssue {
    #[error("the key was not found at the start of a top-level line")]
    KeyNotFound,

    #[error("the list value uses an anchor, tag, or other unsupported form")]
    UnsupportedValue,

    #[error("the flow sequence does not close on the key's line")]
    UnclosedFlow,

    #[error("unexpected character in flow sequence at column {0}")]
    UnexpectedFlowCharacter(usize),

    #[error("no block sequence items follow the key")]
    NoBlockItems,

    #[error("found {found} items in the source but the parser reported {expected}")]
    ItemCountMismatch { found: usize, expected: usize },

    #[error("another list field was already extracted from this document")]
    AlreadyExtracted,
}

/// A list found in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LocatedList {
    /// Byte offset where the list's replaceable text starts.
    pub start: usize,
    /// Byte offset one past the end of the replaceable text.
    pub end: usize,
    /// Source chunk of each entry, in document order.
    pub chunks: Vec<String>,
    pub style: ListStyle,
}

impl LocatedList {
    /// Pairs each chunk with its parsed value.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutIssue::ItemCountMismatch`] when the scan and the parser
    /// disagree on the number of entries.
    pub fn into_entries(self, values: Vec<String>) -> Result<(Vec<Entry>, ListStyle), LayoutIssue> {
        if self.chunks.len() != values.len() {
            return Err(LayoutIssue::ItemCountMismatch {
                found: self.chunks.len(),
                expected: values.len(),
            });
        }
        let entries = values
            .into_iter()
            .zip(self.chunks)
            .map(|(value, source)| Entry { value, source })
            .collect();
        Ok((entries, self.style))
    }
}

/// One physical line with its byte offset.  `raw` keeps the line terminator.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    start: usize,
    raw: &'a str,
}

impl<'a> Line<'a> {
    fn content(&self) -> &'a str {
        self.raw.trim_end_matches(|c: char| c == '\n' || c == '\r')
    }

    fn end(&self) -> usize {
        self.start + self.raw.len()
    }

    fn indent(&self) -> usize {
        let content = self.content();
        content.len() - content.trim_start_matches(' ').len()
    }

    fn is_trivia(&self) -> bool {
        let trimmed = self.content().trim_start();
        trimmed.is_empty() || trimmed.starts_with('#')
    }

    fn is_sequence_item(&self) -> bool {
        let trimmed = self.content().trim_start_matches(' ');
        trimmed == "-" || trimmed.starts_with("- ") || trimmed.starts_with("-\t")
    }
}

/// Byte order mark some editors put at the start of UTF-8 files.
const BOM: char = '\u{FEFF}';

fn split_lines(source: &str) -> Vec<Line<'_>> {
    let mut offset = 0;
    source
        .split_inclusive('\n')
        .map(|raw| {
            let line = Line { start: offset, raw };
            offset += raw.len();
            line
        })
        .collect()
}

/// Returns `"\r\n"` when the first line break of `source` is CRLF.
pub(crate) fn detect_line_ending(source: &str) -> &'static str {
    match source.find('\n') {
        Some(idx) if source[..idx].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// If `content` is a top-level `field:` line, returns the text after the colon.
fn key_remainder<'a>(content: &'a str, field: &str) -> Option<&'a str> {
    let after_key = content
        .strip_prefix(field)
        .or_else(|| quoted_key(content, field, '"'))
        .or_else(|| quoted_key(content, field, '\''))?;
    let rest = after_key
        .trim_start_matches(|c: char| c == ' ' || c == '\t')
        .strip_prefix(':')?;
    if rest.is_empty() || rest.starts_with(' ') || rest.starts_with('\t') {
        Some(rest)
    } else {
        None
    }
}

fn quoted_key<'a>(content: &'a str, field: &str, quote: char) -> Option<&'a str> {
    content
        .strip_prefix(quote)?
        .strip_prefix(field)?
        .strip_prefix(quote)
}

/// Finds the list stored under the top-level key `field`.
///
/// # Errors
///
/// Returns a [`LayoutIssue`] when the key cannot be found at column zero or
/// its value is written in a form this scanner does not handle.
pub(crate) fn locate_list(source: &str, field: &str) -> Result<LocatedList, LayoutIssue> {
    let lines = split_lines(source);

    let (key_index, remainder) = lines
        .iter()
        .enumerate()
        .find_map(|(idx, line)| {
            let content = match idx {
                0 => line.content().trim_start_matches(BOM),
                _ => line.content(),
            };
            key_remainder(content, field).map(|rest| (idx, rest))
        })
        .ok_or(LayoutIssue::KeyNotFound)?;

    let value = remainder.trim_start();
    let located = if value.is_empty() || value.starts_with('#') {
        locate_block(&lines[key_index + 1..], detect_line_ending(source))?
    } else if value.starts_with('[') {
        let key_line = lines[key_index];
        let column = key_line.content().len() - value.len();
        locate_flow(value, key_line.start + column)?
    } else {
        return Err(LayoutIssue::UnsupportedValue);
    };

    debug!(
        field,
        start = located.start,
        end = located.end,
        items = located.chunks.len(),
        "located list in source"
    );
    Ok(located)
}

fn locate_block(lines: &[Line<'_>], line_ending: &str) -> Result<LocatedList, LayoutIssue> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut pending: Vec<Line<'_>> = Vec::new();
    let mut dash_indent: Option<usize> = None;
    let mut start = None;
    let mut end = 0;

    for line in lines {
        if line.is_trivia() {
            pending.push(*line);
            continue;
        }

        let indent = line.indent();
        match dash_indent {
            None => {
                if !line.is_sequence_item() {
                    break;
                }
                // Blank lines right under the key stay there; from the first
                // comment on, the trivia travels with the first entry.
                let attached = pending
                    .iter()
                    .position(|trivia| !trivia.content().trim().is_empty())
                    .map_or(&[][..], |first| &pending[first..]);
                start = Some(attached.first().map_or(line.start, |trivia| trivia.start));
                attached.iter().for_each(|trivia| current.push_str(trivia.raw));
                pending.clear();
                dash_indent = Some(indent);
                current.push_str(line.raw);
            }
            Some(dash) if indent == dash && line.is_sequence_item() => {
                chunks.push(std::mem::take(&mut current));
                pending.drain(..).for_each(|trivia| current.push_str(trivia.raw));
                current.push_str(line.raw);
            }
            Some(dash) if indent > dash => {
                // Continuation of a multi-line scalar; blank lines inside it stay put.
                pending.drain(..).for_each(|trivia| current.push_str(trivia.raw));
                current.push_str(line.raw);
            }
            Some(_) => break,
        }
        end = line.end();
    }

    let start = start.ok_or(LayoutIssue::NoBlockItems)?;
    let final_newline = current.ends_with('\n');
    chunks.push(current);

    Ok(LocatedList {
        start,
        end,
        chunks,
        style: ListStyle::Block {
            line_ending: line_ending.to_string(),
            final_newline,
        },
    })
}

/// Splits a single-line flow sequence.  `value` starts at `[` and `offset` is
/// the absolute byte position of that bracket.
fn locate_flow(value: &str, offset: usize) -> Result<LocatedList, LayoutIssue> {
    let bytes = value.as_bytes();
    let mut tokens: Vec<(usize, usize)> = Vec::new();
    let mut pos = 1;

    let close = loop {
        pos = skip_blanks(bytes, pos);
        match bytes.get(pos) {
            None => return Err(LayoutIssue::UnclosedFlow),
            Some(b']') => break pos,
            Some(_) => {}
        }

        let token_start = pos;
        let token_end = match bytes[pos] {
            b'"' => scan_double_quoted(bytes, pos)?,
            b'\'' => scan_single_quoted(bytes, pos)?,
            _ => scan_plain(bytes, pos),
        };
        tokens.push((token_start, token_end));

        pos = skip_blanks(bytes, token_end);
        match bytes.get(pos) {
            Some(b',') => pos += 1,
            Some(b']') => break pos,
            Some(_) => return Err(LayoutIssue::UnexpectedFlowCharacter(pos)),
            None => return Err(LayoutIssue::UnclosedFlow),
        }
    };

    let (open, separator, close_text) = match (tokens.first(), tokens.last()) {
        (Some(&(first_start, first_end)), Some(&(_, last_end))) => {
            let separator = match tokens.get(1) {
                Some(&(second_start, _)) => &value[first_end..second_start],
                None => ", ",
            };
            (
                &value[..first_start],
                separator,
                &value[last_end..=close],
            )
        }
        _ => ("[", ", ", &value[1..=close]),
    };

    Ok(LocatedList {
        start: offset,
        end: offset + close + 1,
        chunks: tokens
            .iter()
            .map(|&(s, e)| value[s..e].to_string())
            .collect(),
        style: ListStyle::Flow {
            open: open.to_string(),
            separator: separator.to_string(),
            close: close_text.to_string(),
        },
    })
}

fn skip_blanks(bytes: &[u8], mut pos: usize) -> usize {
    while matches!(bytes.get(pos), Some(b' ') | Some(b'\t')) {
        pos += 1;
    }
    pos
}

/// Returns the position just past the closing `"`.
fn scan_double_quoted(bytes: &[u8], mut pos: usize) -> Result<usize, LayoutIssue> {
    pos += 1;
    while let Some(&b) = bytes.get(pos) {
        match b {
            b'\\' => pos += 2,
            b'"' => return Ok(pos + 1),
            _ => pos += 1,
        }
    }
    Err(LayoutIssue::UnclosedFlow)
}

/// Returns the position just past the closing `'`.  `''` is an escaped quote.
fn scan_single_quoted(bytes: &[u8], mut pos: usize) -> Result<usize, LayoutIssue> {
    pos += 1;
    while let Some(&b) = bytes.get(pos) {
        if b == b'\'' {
            if bytes.get(pos + 1) == Some(&b'\'') {
                pos += 2;
                continue;
            }
            return Ok(pos + 1);
        }
        pos += 1;
    }
    Err(LayoutIssue::UnclosedFlow)
}

/// Plain scalars in flow context end at `,` or `]`; trailing blanks are not
/// part of the token.
fn scan_plain(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while let Some(&b) = bytes.get(pos) {
        if b == b',' || b == b']' {
            break;
        }
        pos += 1;
    }
    while pos > start && matches!(bytes[pos - 1], b' ' | b'\t') {
        pos -= 1;
    }
    pos
}

// ── Tests ─────────────────────────────────────────────────────────────────────
