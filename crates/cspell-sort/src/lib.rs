//! cspell-sort library crate.
//!
//! Keeps the `words` list of a `cspell.yaml` sorted and free of duplicates
//! without disturbing the rest of the file.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! main.rs (CLI flags, logging, exit status)
//!         ↓
//! [cspell-sort]
//!   ├── domain/           RunSettings: which file, which field, which mode
//!   ├── application/      normalize_config: Load → Extract → Normalize → Save
//!   └── infrastructure/
//!         └── storage/    ConfigStore trait, FileStore (atomic write), MemoryStore
//!         ↓
//! [cspell-sort-core]      Document model and the sort/dedup itself
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O.
//! - `application` talks to storage only through the `ConfigStore` trait, so
//!   the whole pipeline runs in tests against an in-memory store.
//! - `infrastructure` owns the file system.

/// Domain layer: run settings (no I/O).
pub mod domain;

/// Application layer: the normalize-config use case.
pub mod application;

/// Infrastructure layer: reading and writing the config file.
pub mod infrastructure;
