//! Cost aggregation across the four estimators.
//!
//! The [`CostEstimator`] validates the snapshot and parameters once, runs
//! slippage, impact, fee and maker/taker models, and combines them into a
//! [`CostEstimate`]. It holds no mutable state and can be shared freely
//! between threads.

use crate::costs::CostModelConfig;
use crate::error::ExecutionError;
use crate::fees::{FeeModel, TieredFee};
use crate::impact::{MarketImpactModel, SquareRootImpact};
use crate::maker_taker::{LogisticMakerTaker, MakerTakerModel};
use crate::slippage::{DepthWalkSlippage, SlippageModel};
use tradesim_types::{CostEstimate, OrderBookSnapshot, TradeParameters};

/// Net cost as `(slippage% + impact% + fees) / 100 * order_size`.
///
/// `fees` is absolute while the other two terms are percentages; the mix is
/// kept as-is for parity with existing consumers.
#[must_use]
pub fn net_transaction_cost(
    slippage_percent: f64,
    market_impact_percent: f64,
    fees_absolute: f64,
    order_size: f64,
) -> f64 {
    (slippage_percent + market_impact_percent + fees_absolute) / 100.0 * order_size
}

/// Stateless trade cost estimator.
pub struct CostEstimator {
    slippage: Box<dyn SlippageModel>,
    impact: Box<dyn MarketImpactModel>,
    fee: Box<dyn FeeModel>,
    maker_taker: Box<dyn MakerTakerModel>,
    default_volatility: f64,
}

impl CostEstimator {
    /// Builds the default model set from a configuration.
    #[must_use]
    pub fn new(config: &CostModelConfig) -> Self {
        Self {
            slippage: Box::new(DepthWalkSlippage::new(config.slippage.exhaustion_penalty)),
            impact: Box::new(SquareRootImpact::new(
                config.impact.hours_per_day,
                config.impact.urgency_factor,
                config.impact.zero_volume_multiplier,
            )),
            fee: Box::new(TieredFee::new(config.fees.clone())),
            maker_taker: Box::new(LogisticMakerTaker::new(config.maker_taker.clone())),
            default_volatility: config.impact.default_volatility,
        }
    }

    /// Validates a configuration and builds the estimator from it.
    ///
    /// # Errors
    /// Returns [`ExecutionError::CostsConfig`] if the configuration is invalid.
    pub fn from_config(config: &CostModelConfig) -> Result<Self, ExecutionError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Replaces the slippage model.
    #[must_use]
    pub fn with_slippage_model(mut self, model: Box<dyn SlippageModel>) -> Self {
        self.slippage = model;
        self
    }

    /// Replaces the fee model.
    #[must_use]
    pub fn with_fee_model(mut self, model: Box<dyn FeeModel>) -> Self {
        self.fee = model;
        self
    }

    /// Names of the active models, in pipeline order.
    #[must_use]
    pub fn model_names(&self) -> [&'static str; 4] {
        [
            self.slippage.name(),
            self.impact.name(),
            self.fee.name(),
            self.maker_taker.name(),
        ]
    }

    /// Estimates the cost of trading `params` against `book`.
    ///
    /// # Errors
    /// - [`ExecutionError::InvalidInput`] if the snapshot or parameters
    ///   violate a precondition.
    /// - [`ExecutionError::ArithmeticDegenerate`] if any output is non-finite.
    pub fn estimate(
        &self,
        book: &OrderBookSnapshot,
        params: &TradeParameters,
    ) -> Result<CostEstimate, ExecutionError> {
        book.validate()?;
        params.validate()?;

        let order_size = params.order_size;
        let volatility = params.volatility_or(self.default_volatility);

        let slippage_percent = self.slippage.estimate(book, order_size, params.side)?;
        let market_impact_percent = self.impact.estimate(book, order_size, volatility);
        let fees_absolute = self.fee.calculate(order_size, params.fee_tier);
        let maker_probability = self.maker_taker.maker_probability(book, order_size);

        let estimate = CostEstimate {
            slippage_percent,
            market_impact_percent,
            fees_absolute,
            net_transaction_cost: net_transaction_cost(
                slippage_percent,
                market_impact_percent,
                fees_absolute,
                order_size,
            ),
            maker_probability,
        };

        if let Some((field, value)) = estimate.first_non_finite() {
            return Err(ExecutionError::ArithmeticDegenerate(format!(
                "{field} evaluated to {value} for {} size {order_size}",
                params.symbol
            )));
        }

        tracing::debug!(
            symbol = %params.symbol,
            side = ?params.side,
            fee_tier = %params.fee_tier,
            order_size,
            slippage_percent,
            market_impact_percent,
            fees_absolute,
            maker_probability,
            "cost estimate computed"
        );

        Ok(estimate)
    }
}

impl Default for CostEstimator {
    fn default() -> Self {
        Self::new(&CostModelConfig::default())
    }
}

impl std::fmt::Debug for CostEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostEstimator")
            .field("models", &self.model_names())
            .field("default_volatility", &self.default_volatility)
            .finish()
    }
}
