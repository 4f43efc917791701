//! # Logging Bootstrap
//!
//! ```text
//! TUI mode       ──► daily rolling file  <data_dir>/logs/beauty-console.log
//!                    (the terminal belongs to ratatui, nothing on stdout)
//! Headless mode  ──► stderr (stdout stays clean for --json output)
//! ```
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show debug messages
//! - `RUST_LOG=beauty=trace` - Show trace for beauty crates only
//! - Default: `info,beauty=debug,reqwest=warn`

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::project_dirs;
use crate::error::{AppError, AppResult};

pub const DEFAULT_FILTER: &str = "info,beauty=debug,reqwest=warn";
const LOG_FILE_PREFIX: &str = "beauty-console.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Directory for log files: platform data dir, or `./logs` as a fallback.
pub fn log_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// File logging for the TUI.
///
/// The returned guard flushes buffered lines on drop; keep it alive until
/// the terminal is restored.
pub fn init_tui() -> AppResult<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing::info!(dir = %dir.display(), "File logging initialized");
    Ok(guard)
}

/// Stderr logging for headless subcommands.
pub fn init_stderr() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
