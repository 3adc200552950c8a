//! Tracing subscriber setup.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::LoggingConfig;

/// File name prefix for rolling log files.
const LOG_FILE_PREFIX: &str = "orgchart.log";

/// Build the filter: `RUST_LOG` when set, otherwise the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.to_ascii_lowercase()))
}

/// Install the global subscriber.
///
/// With `config.dir` set, output is also written to a daily-rolling file; the
/// returned guard flushes it and must be held until shutdown.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let stdout = fmt::layer();

    match &config.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file = fmt::layer().with_ansi(false).with_writer(writer);

            tracing_subscriber::registry()
                .with(env_filter(config))
                .with(stdout)
                .with(file)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(env_filter(config)).with(stdout).init();
            None
        }
    }
}
