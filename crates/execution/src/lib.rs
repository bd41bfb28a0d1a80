//! # Tradesim Execution
//!
//! Trade cost models for the trade simulator.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Slippage Models**: Walk the opposite ladder and price the average fill against mid
//! - **Market Impact Models**: Square-root impact on a depth-inferred daily volume
//! - **Fee Models**: Tiered rate lookup with a standard-rate fallback
//! - **Maker/Taker Models**: Logistic probability of resting as maker
//! - **Cost Estimator**: Validates inputs and aggregates all four into a `CostEstimate`
//! - **Costs Loading**: YAML-based model coefficients
//!
//! ## Purity
//!
//! Every model is a pure function of the snapshot and parameters. Estimators
//! hold only their coefficients, so one instance can serve any number of
//! concurrent requests.
//!
//! ## Example
//!
//! ```rust
//! use tradesim_execution::CostEstimator;
//! use tradesim_types::{OrderBookSnapshot, TradeParameters};
//!
//! let book = OrderBookSnapshot::from_ladders(&[(100.0, 10.0)], &[(101.0, 10.0)], 0).unwrap();
//! let params = TradeParameters::new("BTC-USDT", 5.0);
//!
//! let estimate = CostEstimator::default().estimate(&book, &params).unwrap();
//! assert!((estimate.fees_absolute - 0.005).abs() < 1e-12);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

pub mod costs;
pub mod error;
pub mod estimator;
pub mod fees;
pub mod impact;
pub mod maker_taker;
pub mod slippage;

// Re-exports for convenience
/// Cost model configuration types.
pub use costs::{CostModelConfig, FeeSchedule, ImpactConfig, MakerTakerConfig, SlippageConfig};
/// Execution error type.
pub use error::ExecutionError;
/// Cost aggregation.
pub use estimator::{CostEstimator, net_transaction_cost};
/// Fee model implementations.
pub use fees::{FeeModel, NoFee, TieredFee};
/// Market impact model implementations.
pub use impact::{MarketImpactModel, SquareRootImpact};
/// Maker/taker model implementations.
pub use maker_taker::{LogisticMakerTaker, MakerTakerFeatures, MakerTakerModel, sigmoid};
/// Slippage model implementations.
pub use slippage::{
    DepthWalkSlippage, FILL_TOLERANCE, LadderFill, NoSlippage, SlippageModel, walk_ladder,
};
