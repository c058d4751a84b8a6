//! File logging
//!
//! The terminal belongs to the UI, so log output goes to
//! `{log.dir}/tradutor.log` through a non-blocking writer. `RUST_LOG`
//! overrides the configured level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::AppResult;

pub const LOG_FILE_NAME: &str = "tradutor.log";

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered lines get flushed. Returns `None` when logging is disabled.
pub fn init(config: &LogConfig) -> AppResult<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = config.directory();
    std::fs::create_dir_all(&log_dir)?;
    let file_appender = rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false);

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::new(&config.level),
    };

    // A subscriber may already be installed (tests); keep it
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init();

    Ok(Some(guard))
}
