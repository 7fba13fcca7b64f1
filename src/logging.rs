//! Diagnostics setup.
//!
//! The game owns the terminal, so logs never go to stdout/stderr. Without a
//! log file no subscriber is installed and `tracing` macros are no-ops.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::filter::EnvFilter;

/// Install a file-backed `fmt` subscriber when `log_file` is set.
///
/// Defaults to `info`; `RUST_LOG` adds directives (e.g. `block_game_core=trace`).
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}
