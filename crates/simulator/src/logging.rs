//! Tracing setup: stdout plus an optional latency log file.
//!
//! `RUST_LOG` overrides the configured level when set.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::SimulatorError;

/// Default latency log file name.
pub const DEFAULT_LOG_FILE: &str = "api_latency.log";

/// Logging configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (e.g. `info`, `tradesim_simulator=debug`)
    #[serde(default = "default_level")]
    pub level: String,
    /// File receiving a copy of every log line; `None` logs to stdout only
    #[serde(default = "default_log_file")]
    pub log_file: Option<PathBuf>,
}

fn default_level() -> String {
    "info".to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_log_file() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_LOG_FILE))
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            log_file: default_log_file(),
        }
    }
}

/// Keeps the non-blocking file writer alive.
///
/// Dropping it flushes and stops the background writer.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global tracing subscriber.
///
/// # Errors
/// Returns [`SimulatorError::Logging`] if the log file path is unusable or a
/// global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<LoggingGuard, SimulatorError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let stdout_layer = fmt::layer().with_target(false).compact();

    let (file_layer, file_guard) = match &config.log_file {
        Some(path) => {
            let (dir, file_name) = split_log_path(path)?;
            std::fs::create_dir_all(&dir).map_err(|e| {
                SimulatorError::Logging(format!("cannot create {}: {e}", dir.display()))
            })?;

            let appender = tracing_appender::rolling::never(&dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| SimulatorError::Logging(e.to_string()))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn split_log_path(path: &Path) -> Result<(PathBuf, PathBuf), SimulatorError> {
    let file_name = path.file_name().ok_or_else(|| {
        SimulatorError::Logging(format!("log file has no file name: {}", path.display()))
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, PathBuf::from(file_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.log_file, Some(PathBuf::from("api_latency.log")));
    }

    #[test]
    fn test_config_deserialize_stdout_only() {
        let config: LoggingConfig =
            serde_json::from_str(r#"{"level": "debug", "log_file": null}"#).unwrap();
        assert_eq!(config.level, "debug");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_split_bare_file_name() {
        let (dir, file) = split_log_path(Path::new("api_latency.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file, PathBuf::from("api_latency.log"));
    }

    #[test]
    fn test_split_nested_path() {
        let (dir, file) = split_log_path(Path::new("logs/server/latency.log")).unwrap();
        assert_eq!(dir, PathBuf::from("logs/server"));
        assert_eq!(file, PathBuf::from("latency.log"));
    }

    #[test]
    fn test_split_rejects_root() {
        assert!(split_log_path(Path::new("/")).is_err());
    }
}
