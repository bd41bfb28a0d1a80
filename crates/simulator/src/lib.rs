//! Tradesim Simulator
//!
//! Wraps the cost estimator with request parsing, latency instrumentation,
//! error categorization, and logging setup.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

pub mod error;
pub mod logging;
pub mod runner;
pub mod timing;

pub use error::SimulatorError;
pub use logging::{LoggingConfig, LoggingGuard, init_tracing};
pub use runner::{simulate, simulate_from_json};
pub use timing::LatencyTimer;
