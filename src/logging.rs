//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so log output goes to a file under the cache
//! directory instead of stderr. `RUST_LOG` overrides the default filter.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Default log file location.
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("cyberquest").join("cyberquest.log"))
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "cyberquest=debug,warn"
    } else {
        "cyberquest=info,warn"
    }
}

/// Build a subscriber writing to `log_file`.
pub fn build_subscriber(log_file: File, verbose: bool) -> impl tracing::Subscriber + Send + Sync {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let fmt_layer = fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry().with(fmt_layer).with(filter)
}

/// Install the global subscriber, logging to `path`.
pub fn init(path: &Path, verbose: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let log_file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    build_subscriber(log_file, verbose)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("cyberquest v{} starting up", env!("CARGO_PKG_VERSION"));
    Ok(())
}
