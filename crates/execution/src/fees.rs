//! Fee models for trade cost estimation.
//!
//! Fees are absolute amounts, not percentages.

use crate::costs::FeeSchedule;
use tradesim_types::FeeTier;

/// Trait for fee calculation models.
pub trait FeeModel: Send + Sync {
    /// Calculates the fee for an order.
    ///
    /// # Arguments
    /// * `order_size` - Quantity traded
    /// * `tier` - Caller's fee bracket
    ///
    /// # Returns
    /// Absolute fee amount
    fn calculate(&self, order_size: f64, tier: FeeTier) -> f64;

    /// Returns the model name for logging/debugging.
    fn name(&self) -> &'static str;
}

/// Tier lookup against a fixed rate table.
#[derive(Debug, Clone, Default)]
pub struct TieredFee {
    /// Rate per tier
    pub schedule: FeeSchedule,
}

impl TieredFee {
    /// Creates a new tiered fee model.
    #[must_use]
    pub fn new(schedule: FeeSchedule) -> Self {
        Self { schedule }
    }
}

impl FeeModel for TieredFee {
    fn calculate(&self, order_size: f64, tier: FeeTier) -> f64 {
        order_size * self.schedule.rate(tier)
    }

    fn name(&self) -> &'static str {
        "TieredFee"
    }
}

/// Zero fee model for testing.
#[derive(Debug, Clone, Default)]
pub struct NoFee;

impl FeeModel for NoFee {
    fn calculate(&self, _order_size: f64, _tier: FeeTier) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "NoFee"
    }
}
