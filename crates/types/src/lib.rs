//! Tradesim Types
//!
//! Data contracts for the trade cost simulator: order-book snapshots,
//! trade parameters, cost estimates, and the request/response envelope.

#![deny(clippy::all)]

pub mod book;
pub mod error;
pub mod estimate;
pub mod params;
pub mod result;
pub mod simulation;

// Re-export main types for convenience
pub use book::{OrderBookLevel, OrderBookSnapshot};
pub use error::CoreError;
pub use estimate::CostEstimate;
pub use params::{DEFAULT_VOLATILITY, FeeTier, TradeParameters, TradeSide};
pub use result::{ErrorDetail, ErrorResult};
pub use simulation::{LatencyMetrics, SimulationRequest, SimulationResponse};
