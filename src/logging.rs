//! Logging setup
//!
//! The library only emits `tracing` events. Applications pick a subscriber
//! with one of the helpers below, or install their own.
//!
//! Filtering follows `RUST_LOG`, falling back to `oxnetwork_sdk=info`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "oxnetwork_sdk=info,oxnetwork=info";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "oxnetwork.log";

/// Output format for terminal logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global subscriber that writes to stderr
///
/// Fails if a global subscriber is already set.
pub fn init_logging(format: LogFormat) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Install a global subscriber writing JSON lines to a daily rolling file in `dir`
///
/// Keep the returned guard alive for as long as logs should be flushed.
pub fn init_file_logging(dir: impl AsRef<Path>) -> Result<WorkerGuard> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {:?}", dir))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize file logging: {}", e))?;

    tracing::info!("Logging to {:?}", dir);
    Ok(guard)
}
