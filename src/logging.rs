use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Overrides the configured filter when set.
pub const LOG_ENV: &str = "HOSTBIND_LOG";

/// Initialize logging to file (never stdout, which carries call results).
///
/// The returned guard flushes buffered records on drop; keep it alive for
/// the life of the process.
pub fn init(filter: &str) -> Result<WorkerGuard> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "hostbind.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .init();

    Ok(guard)
}

pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hostbind")
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("hostbind"))
}
