//! Tracing initialization.

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mergington_config::LoggingConfig;

/// Keeps the file writer flushing for the life of the process.
static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Default log directory (`<data dir>/mergington/logs`).
pub(crate) fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mergington")
        .join("logs")
}

/// Initialize tracing with console output and, when enabled, daily-rotated
/// log files.
///
/// `RUST_LOG` takes precedence over the configured level.
pub(crate) fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_layer = if config.file {
        let log_dir = config.dir.clone().unwrap_or_else(default_log_dir);
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("mergington")
            .filename_suffix("log")
            .max_log_files(config.max_files)
            .build(&log_dir)?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(file_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_dir() {
        let dir = default_log_dir();
        assert!(dir.ends_with("mergington/logs"));
    }
}
