//! Command-line configuration for the server binary.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use tradesim_execution::{CostModelConfig, ExecutionError};
use tradesim_simulator::LoggingConfig;
use tradesim_simulator::logging::DEFAULT_LOG_FILE;

/// Trade cost simulator HTTP server
#[derive(Debug, Clone, Parser)]
#[command(name = "tradesim-server")]
#[command(version, about = "Trade cost simulator HTTP API", long_about = None)]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// Latency log file
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log to stdout only
    #[arg(long)]
    pub no_log_file: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// YAML file overriding the cost model coefficients
    #[arg(long)]
    pub costs: Option<PathBuf>,
}

impl ServerConfig {
    /// Socket address to bind.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Logging configuration derived from the flags.
    #[must_use]
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            log_file: (!self.no_log_file).then(|| self.log_file.clone()),
        }
    }

    /// Loads the cost model from `--costs`, or the built-in coefficients.
    ///
    /// # Errors
    /// Returns an [`ExecutionError`] if the YAML file is unreadable or invalid.
    pub fn cost_model(&self) -> Result<CostModelConfig, ExecutionError> {
        match &self.costs {
            Some(path) => CostModelConfig::load(path),
            None => Ok(CostModelConfig::default()),
        }
    }
}
