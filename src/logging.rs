//! Log setup.
//!
//! The game owns the terminal while it runs, so logs go to a file or nowhere.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::config::Config;

/// Install a file-backed tracing subscriber if a log path is configured.
///
/// Returns whether logging was enabled.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(config.log_level)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(true)
}
