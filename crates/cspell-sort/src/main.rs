//! cspell-sort entry point.
//!
//! Sorts the `words` list of `cspell.yaml` alphabetically and removes
//! duplicates, leaving every other line of the file untouched.
//!
//! # Usage
//!
//! ```text
//! cspell-sort [OPTIONS]
//!
//! Options:
//!   --file  <PATH>   Config file to rewrite [default: cspell.yaml]
//!   --field <NAME>   Top-level list to normalize [default: words]
//!   --check          Do not write; exit 1 if the file is not normalized
//!   -v, --verbose    Debug logging when RUST_LOG is unset
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable            | Default       | Description            |
//! |---------------------|---------------|------------------------|
//! | `CSPELL_SORT_FILE`  | `cspell.yaml` | Config file to rewrite |
//! | `CSPELL_SORT_FIELD` | `words`       | List field to sort     |
//! | `RUST_LOG`          | `info`        | Log filter             |
//!
//! # Exit status
//!
//! `0` when the file was normalized (or already was), `1` on any failure.
//! Failures are logged to stderr and the file is left as it was.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cspell_sort::application::normalize_config;
use cspell_sort::domain::{RunMode, RunSettings, DEFAULT_CONFIG_FILE, DEFAULT_FIELD};
use cspell_sort::infrastructure::FileStore;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Sort and deduplicate the word list of a cspell config in place.
#[derive(Debug, Parser)]
#[command(
    name = "cspell-sort",
    about = "Sort and deduplicate the word list of a cspell config in place",
    version
)]
struct Cli {
    /// Path of the YAML config file to rewrite.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, env = "CSPELL_SORT_FILE")]
    file: PathBuf,

    /// Top-level key holding the list to normalize.
    #[arg(long, default_value = DEFAULT_FIELD, env = "CSPELL_SORT_FIELD")]
    field: String,

    /// Report whether the file is normalized without writing it.
    ///
    /// Exits with status 1 if the list would change.  Useful in CI.
    #[arg(long)]
    check: bool,

    /// Log at debug level when `RUST_LOG` is not set.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Converts the parsed CLI arguments into [`RunSettings`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--field` is empty or only whitespace.
    fn into_run_settings(self) -> anyhow::Result<RunSettings> {
        if self.field.trim().is_empty() {
            anyhow::bail!("--field must not be empty");
        }
        Ok(RunSettings {
            path: self.file,
            field: self.field,
            mode: if self.check {
                RunMode::Check
            } else {
                RunMode::Write
            },
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// 1. CLI arguments are parsed with `clap`.
/// 2. `tracing_subscriber` is initialised; `RUST_LOG` wins over `--verbose`.
/// 3. [`run`] performs the normalization.  Any error it returns is the single
///    top-level failure boundary: it is logged and turned into exit status 1.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = cli.into_run_settings()?;

    let outcome = normalize_config(&FileStore::new(), &settings).with_context(|| {
        format!(
            "failed to normalize `{}` in {}",
            settings.field,
            settings.path.display()
        )
    })?;

    if outcome.written {
        info!(
            "normalized `{}` in {}: {} entries, {} duplicates removed",
            outcome.field,
            outcome.path.display(),
            outcome.after,
            outcome.duplicates_removed()
        );
    } else {
        info!(
            "`{}` in {} is already normalized ({} entries)",
            outcome.field,
            outcome.path.display(),
            outcome.after
        );
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
