//! Logging and tracing initialization.
//!
//! Terminal logs go to stderr through a compact fmt layer filtered by
//! `RUST_LOG` or the resolved verbosity. When a log directory is
//! configured, a second layer writes JSONL via a non-blocking daily
//! rolling appender; the returned guard must stay alive for the duration
//! of the process so buffered logs flush on exit.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// File logging settings resolved from environment and config.
pub struct ObservabilityConfig {
    /// Directory for JSONL log files; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log directory: `REVIEWDECK_LOG_DIR` wins over config.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_dir = std::env::var_os("REVIEWDECK_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_dir }
    }
}

/// Build the env filter from CLI verbosity flags and the configured level.
///
/// `RUST_LOG` takes precedence when set; `--quiet` forces errors only;
/// each `-v` raises the level (debug, then trace).
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = level_directive(quiet, verbose, config_level);
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Resolve the default filter directive from the verbosity flags.
fn level_directive<'a>(quiet: bool, verbose: u8, config_level: &'a str) -> &'a str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Install the global subscriber. Returns the appender guard when file
/// logging is active.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(dir, "reviewdeck.jsonl");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let file_layer = fmt::layer().json().with_writer(writer);
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_directive(true, 3, "info"), "error");
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_directive(false, 0, "warn"), "warn");
        assert_eq!(level_directive(false, 1, "warn"), "debug");
        assert_eq!(level_directive(false, 2, "warn"), "trace");
    }
}
