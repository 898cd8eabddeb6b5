//! Logging Infrastructure
//!
//! Structured logging setup for development (pretty, stdout) and
//! production (JSON, daily-rolling files).

use std::path::Path;
use std::time::{Duration, SystemTime};

use tracing_subscriber::EnvFilter;

use super::{AppError, AppResult};

/// File name prefix of rolling log files
const LOG_FILE_PREFIX: &str = "pricing-engine";

/// Initialize the logger with defaults (info, text, stdout)
pub fn init_logger() -> AppResult<()> {
    init_logger_with_file(None, None, None)
}

/// Initialize the logger with optional JSON formatting and file output
///
/// `RUST_LOG` takes precedence over `log_level` when set. File output is
/// only enabled when `log_dir` exists.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: Option<bool>,
    log_dir: Option<&str>,
) -> AppResult<()> {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let json = json.unwrap_or(false);

    let appender = log_dir
        .filter(|dir| Path::new(dir).is_dir())
        .map(|dir| tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let result = match (json, appender) {
        (true, Some(appender)) => builder.json().with_writer(appender).try_init(),
        (true, None) => builder.json().try_init(),
        (false, Some(appender)) => builder.with_ansi(false).with_writer(appender).try_init(),
        (false, None) => builder.try_init(),
    };

    result.map_err(|e| AppError::config(format!("Failed to install logger: {e}")))
}

/// Remove rolling log files older than `days`
///
/// Returns the number of deleted files. A missing directory is not an error.
pub fn cleanup_old_logs(log_dir: &str, days: u64) -> std::io::Result<usize> {
    let dir = Path::new(log_dir);
    if !dir.is_dir() {
        return Ok(0);
    }

    let max_age = Duration::from_secs(days.saturating_mul(24 * 60 * 60));
    let now = SystemTime::now();
    let mut removed = 0;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_log = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(LOG_FILE_PREFIX));
        if !is_log || !path.is_file() {
            continue;
        }

        let modified = entry.metadata()?.modified()?;
        let age = now.duration_since(modified).unwrap_or_default();
        if age > max_age {
            std::fs::remove_file(&path)?;
            removed += 1;
        }
    }

    if removed > 0 {
        tracing::info!(removed, log_dir, "Removed old log files");
    }
    Ok(removed)
}

/// Apply the configured log retention at startup
///
/// `retention_days == 0` keeps everything. Cleanup failures are logged and
/// never stop startup.
pub fn apply_log_retention(log_dir: Option<&str>, retention_days: u64) -> usize {
    let Some(dir) = log_dir else {
        return 0;
    };
    if retention_days == 0 {
        return 0;
    }
    match cleanup_old_logs(dir, retention_days) {
        Ok(removed) => removed,
        Err(e) => {
            tracing::warn!(log_dir = dir, error = %e, "Log cleanup failed");
            0
        }
    }
}
