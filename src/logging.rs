//! Logging initialization with per-session file output

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Number of session log files kept on disk.
pub const MAX_SESSION_LOGS: usize = 20;

const SESSION_LOG_PREFIX: &str = "session_";
const SESSION_LOG_SUFFIX: &str = ".log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File name for a session started at `started`.
pub fn session_log_name(started: chrono::DateTime<chrono::Local>) -> String {
    format!(
        "{}{}{}",
        SESSION_LOG_PREFIX,
        started.format("%Y-%m-%d_%H-%M-%S"),
        SESSION_LOG_SUFFIX
    )
}

fn is_session_log(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(SESSION_LOG_PREFIX) && n.ends_with(SESSION_LOG_SUFFIX))
}

/// Delete all but the `keep` most recently modified session logs in `dir`.
/// Returns the removed paths.
pub fn prune_session_logs(dir: &Path, keep: usize) -> std::io::Result<Vec<PathBuf>> {
    let mut logs: Vec<(std::time::SystemTime, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !is_session_log(&path) || !entry.file_type()?.is_file() {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        logs.push((modified, path));
    }

    // Newest first; name breaks ties so the order is deterministic
    logs.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));

    let mut removed = Vec::new();
    for (_, path) in logs.into_iter().skip(keep) {
        std::fs::remove_file(&path)?;
        removed.push(path);
    }
    Ok(removed)
}

/// Initialize logging with optional file output.
/// Returns a guard that must be kept alive for the duration of the program.
pub fn init_logging(log_dir: Option<PathBuf>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let console_layer = fmt::layer()
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(true)
        .with_thread_ids(false);

    match log_dir {
        Some(dir) => {
            // One file per run, like the retention policy expects
            let file_name = session_log_name(chrono::Local::now());
            let file_appender = tracing_appender::rolling::never(&dir, &file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                .with_ansi(false)
                .with_target(true);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .with(file_layer)
                .init();

            match prune_session_logs(&dir, MAX_SESSION_LOGS) {
                Ok(removed) if !removed.is_empty() => {
                    tracing::debug!("Removed {} old session logs", removed.len());
                }
                Ok(_) => {}
                Err(e) => tracing::warn!("Failed to prune old session logs: {}", e),
            }

            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .init();
            None
        }
    }
}
