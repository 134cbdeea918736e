use std::ffi::OsString;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Overrides the directory holding the log files.
pub const LOG_DIR_ENV: &str = "KDRIVE_LOG_DIR";

/// Directory holding rolling log files: `$KDRIVE_LOG_DIR`, else `~/.kdrive/logs`.
pub fn log_dir() -> PathBuf {
    resolve_log_dir(std::env::var_os(LOG_DIR_ENV), dirs::home_dir())
}

fn resolve_log_dir(configured: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    match configured {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => home
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".kdrive")
            .join("logs"),
    }
}

/// Install the global subscriber.
///
/// Logs go to a daily file named after `component` and, with `to_stderr`,
/// to stderr as well. When the log directory cannot be created, stderr is
/// used instead and no guard is returned.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<WorkerGuard> {
    let log_dir = log_dir();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard, dir_error) = match std::fs::create_dir_all(&log_dir) {
        Ok(()) => {
            // Files are named after the component, e.g. cli.log.2026-10-16
            let file_appender = tracing_appender::rolling::daily(&log_dir, component);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    let stderr_layer = (to_stderr || dir_error.is_some()).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    if let Some(e) = dir_error {
        tracing::warn!("Cannot create log directory {}: {}", log_dir.display(), e);
    }

    guard
}
