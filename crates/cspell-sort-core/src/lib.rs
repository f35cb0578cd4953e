//! # cspell-sort-core
//!
//! Document model and normalization logic for keeping a cspell configuration's
//! word list sorted and free of duplicates.
//!
//! This crate does no file I/O.  It takes YAML text in and gives YAML text
//! back, so everything here can be tested with plain string fixtures.
//!
//! # Architecture overview (for beginners)
//!
//! A cspell config usually looks like this:
//!
//! ```yaml
//! version: "0.2"
//! # Project specific words
//! words:
//!   - tokio
//!   - serde
//!   - tokio
//! ```
//!
//! We want to rewrite it so `words` reads `serde`, `tokio`, without touching
//! the comment, the `version` line, or anything else.  A plain
//! "deserialize → sort → serialize" round trip through a YAML library would
//! lose the comments and reflow the file, so instead the crate works on two
//! views of the same text:
//!
//! - **`domain::document`** – The [`Document`].  It parses the text with
//!   `serde_yaml` to learn what the values *mean* (is `words` present? is it a
//!   list? of scalars?) and keeps the original text to know what it *looks
//!   like*.
//!
//! - **`domain::locate`** – A small line scanner that finds the exact byte
//!   span of the list inside the original text and cuts it into one chunk per
//!   entry (comments included).
//!
//! - **`domain::word_list`** – The [`WordList`] built from those chunks.  It
//!   can be reordered freely and rendered back in the original style.
//!
//! - **`domain::normalize`** – Sorting and deduplication of a [`WordList`].

pub mod domain;

pub use domain::document::{Document, DocumentError, SchemaProblem};
pub use domain::locate::LayoutIssue;
pub use domain::normalize::{compare_words, normalize, NormalizeReport};
pub use domain::word_list::{Entry, ListStyle, WordList};
