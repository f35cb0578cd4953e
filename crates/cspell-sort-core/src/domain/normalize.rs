//! Sorting and deduplication of a [`WordList`].
//!
//! # Ordering
//!
//! Words are compared by Unicode code point, case-sensitive.  This is Rust's
//! built-in `str` ordering (UTF-8 byte order gives the same result), so
//! uppercase ASCII letters sort before lowercase ones:
//!
//! ```text
//! [banana, Apple, apple, Banana]  →  [Apple, Banana, apple, banana]
//! ```
//!
//! # Deduplication
//!
//! After sorting, equal values are adjacent.  The first of each run is kept
//! and the rest are dropped together with their comments.  Because the sort
//! is stable, the kept entry is the one that appeared first in the file.
//!
//! The result depends only on the multiset of values: any permutation of the
//! same words produces the same output order.

use std::cmp::Ordering;

use tracing::debug;

use super::word_list::WordList;

/// Total order used for word lists: case-sensitive code-point order.
pub fn compare_words(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Counts reported by [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Number of entries before normalization.
    pub before: usize,
    /// Number of entries after duplicates were removed.
    pub after: usize,
}

impl NormalizeReport {
    pub fn duplicates_removed(&self) -> usize {
        self.before - self.after
    }
}

/// Sorts `list` and removes duplicate values, in place.
pub fn normalize(list: &mut WordList) -> NormalizeReport {
    let before = list.entries.len();

    list.entries.sort_by(|a, b| compare_words(&a.value, &b.value));
    list.entries.dedup_by(|later, earlier| later.value == earlier.value);

    let report = NormalizeReport {
        before,
        after: list.entries.len(),
    };
    debug!(
        field = %list.field,
        before = report.before,
        after = report.after,
        "normalized word list"
    );
    report
}

// ── Tests ─────────────────────────────────────────────────────────────────────
