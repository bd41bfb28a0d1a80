//! Slippage models for trade cost estimation.
//!
//! Slippage is the percentage gap between the volume-weighted average price
//! an aggressive order would achieve and the pre-trade mid price.

use crate::error::ExecutionError;
use tradesim_types::{OrderBookLevel, OrderBookSnapshot, TradeSide};

/// Trait for slippage estimation models.
pub trait SlippageModel: Send + Sync {
    /// Estimates slippage for an aggressive order.
    ///
    /// # Arguments
    /// * `book` - Validated order-book snapshot
    /// * `order_size` - Quantity to trade
    /// * `side` - Trade side
    ///
    /// # Returns
    /// Slippage in percent (positive = adverse for the trader)
    ///
    /// # Errors
    /// Returns an error if the snapshot lacks a best bid or ask.
    fn estimate(
        &self,
        book: &OrderBookSnapshot,
        order_size: f64,
        side: TradeSide,
    ) -> Result<f64, ExecutionError>;

    /// Returns the model name for logging/debugging.
    fn name(&self) -> &'static str;
}

/// Walks the opposite ladder level by level.
///
/// Size the ladder cannot absorb is charged at the worst visible price plus
/// an exhaustion penalty.
#[derive(Debug, Clone)]
pub struct DepthWalkSlippage {
    /// Premium on unfilled size (e.g., 0.02 for 2%)
    pub exhaustion_penalty: f64,
}

impl DepthWalkSlippage {
    /// Creates a new depth-walk slippage model.
    #[must_use]
    pub fn new(exhaustion_penalty: f64) -> Self {
        Self { exhaustion_penalty }
    }
}

impl Default for DepthWalkSlippage {
    fn default() -> Self {
        Self::new(0.02)
    }
}

/// Outcome of walking one ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LadderFill {
    /// Notional paid (or received) for the filled part
    pub notional: f64,
    /// Quantity filled from visible levels
    pub filled: f64,
    /// Quantity the ladder could not absorb
    pub remaining: f64,
}

impl LadderFill {
    /// True when the ladder left a material part of `order_size` unfilled.
    ///
    /// Leftovers within [`FILL_TOLERANCE`] of the order size are rounding
    /// noise from summing level sizes.
    #[must_use]
    pub fn exhausted(&self, order_size: f64) -> bool {
        self.remaining > order_size * FILL_TOLERANCE
    }
}

/// Relative leftover below which a walk counts as fully filled.
pub const FILL_TOLERANCE: f64 = 1e-9;

/// Consumes `order_size` from `levels`, best level first.
#[must_use]
pub fn walk_ladder(levels: &[OrderBookLevel], order_size: f64) -> LadderFill {
    let mut remaining = order_size;
    let mut notional = 0.0;

    for level in levels {
        if remaining <= 0.0 {
            break;
        }
        let take = remaining.min(level.size);
        notional += take * level.price;
        remaining -= take;
    }

    LadderFill {
        notional,
        filled: order_size - remaining,
        remaining,
    }
}

impl SlippageModel for DepthWalkSlippage {
    fn estimate(
        &self,
        book: &OrderBookSnapshot,
        order_size: f64,
        side: TradeSide,
    ) -> Result<f64, ExecutionError> {
        if order_size <= 0.0 {
            return Ok(0.0);
        }

        let mid = book.mid_price().ok_or_else(|| {
            ExecutionError::InvalidInput("slippage requires a two-sided book".to_string())
        })?;
        let ladder = book.opposite_ladder(side);
        let Some(worst) = ladder.last() else {
            return Err(ExecutionError::InvalidInput(
                "slippage requires a non-empty ladder".to_string(),
            ));
        };

        let fill = walk_ladder(ladder, order_size);
        let mut notional = fill.notional;

        if fill.exhausted(order_size) {
            let penalty_price = match side {
                TradeSide::Buy => worst.price * (1.0 + self.exhaustion_penalty),
                TradeSide::Sell => worst.price * (1.0 - self.exhaustion_penalty),
            };
            tracing::debug!(
                remaining = fill.remaining,
                penalty_price,
                "order exceeds visible depth, charging exhaustion penalty"
            );
            notional += fill.remaining * penalty_price;
        }

        let avg_price = notional / order_size;
        let slippage = match side {
            TradeSide::Buy => (avg_price / mid - 1.0) * 100.0,
            TradeSide::Sell => (1.0 - avg_price / mid) * 100.0,
        };

        Ok(slippage)
    }

    fn name(&self) -> &'static str {
        "DepthWalkSlippage"
    }
}

/// Zero slippage model for testing or ideal conditions.
#[derive(Debug, Clone, Default)]
pub struct NoSlippage;

impl SlippageModel for NoSlippage {
    fn estimate(
        &self,
        _book: &OrderBookSnapshot,
        _order_size: f64,
        _side: TradeSide,
    ) -> Result<f64, ExecutionError> {
        Ok(0.0)
    }

    fn name(&self) -> &'static str {
        "NoSlippage"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn single_level_book() -> OrderBookSnapshot {
        OrderBookSnapshot::from_ladders(&[(100.0, 10.0)], &[(101.0, 10.0)], 0).unwrap()
    }

    #[test]
    fn test_zero_size_short_circuits() {
        let model = DepthWalkSlippage::default();
        let s = model.estimate(&single_level_book(), 0.0, TradeSide::Buy).unwrap();
        assert_relative_eq!(s, 0.0);
    }

    #[test]
    fn test_buy_within_best_level() {
        let model = DepthWalkSlippage::default();
        let s = model.estimate(&single_level_book(), 5.0, TradeSide::Buy).unwrap();
        assert_relative_eq!(s, (101.0 / 100.5 - 1.0) * 100.0, epsilon = 1e-10);
        assert_relative_eq!(s, 0.4975, epsilon = 1e-4);
    }

    #[test]
    fn test_buy_exact_depth_has_no_penalty() {
        let model = DepthWalkSlippage::default();
        let s = model.estimate(&single_level_book(), 10.0, TradeSide::Buy).unwrap();
        assert_relative_eq!(s, (101.0 / 100.5 - 1.0) * 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_multi_level_exact_depth_has_no_penalty() {
        let book = OrderBookSnapshot::from_ladders(
            &[(100.0, 1.0)],
            &[(101.0, 0.1), (102.0, 0.2)],
            0,
        )
        .unwrap();
        let order_size = book.ask_volume();

        // 0.1 + 0.2 leaves a rounding residue after the walk
        let fill = walk_ladder(&book.asks, order_size);
        assert!(fill.remaining > 0.0);
        assert!(!fill.exhausted(order_size));

        let model = DepthWalkSlippage::new(0.5);
        let s = model.estimate(&book, order_size, TradeSide::Buy).unwrap();
        let avg = (0.1 * 101.0 + 0.2 * 102.0) / 0.3;
        assert_relative_eq!(s, (avg / 100.5 - 1.0) * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_walk_beyond_depth_is_exhausted() {
        let fill = walk_ladder(&single_level_book().asks, 10.5);
        assert!(fill.exhausted(10.5));
    }

    #[test]
    fn test_buy_exhausts_liquidity() {
        let model = DepthWalkSlippage::default();
        let s = model.estimate(&single_level_book(), 20.0, TradeSide::Buy).unwrap();

        // 10 @ 101 + 10 @ 103.02 -> avg 102.01
        let expected = (102.01 / 100.5 - 1.0) * 100.0;
        assert_relative_eq!(s, expected, epsilon = 1e-10);
        assert_relative_eq!(s, 1.503, epsilon = 1e-3);
    }

    #[test]
    fn test_buy_walks_multiple_levels() {
        let book = OrderBookSnapshot::from_ladders(
            &[(99.0, 5.0)],
            &[(101.0, 1.0), (102.0, 2.0), (103.0, 5.0)],
            0,
        )
        .unwrap();
        let model = DepthWalkSlippage::default();
        let s = model.estimate(&book, 4.0, TradeSide::Buy).unwrap();

        // 1 @ 101 + 2 @ 102 + 1 @ 103 = 408 -> avg 102, mid 100
        assert_relative_eq!(s, 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_sell_within_best_level() {
        let model = DepthWalkSlippage::default();
        let s = model.estimate(&single_level_book(), 5.0, TradeSide::Sell).unwrap();
        assert_relative_eq!(s, (1.0 - 100.0 / 100.5) * 100.0, epsilon = 1e-10);
        assert!(s > 0.0);
    }

    #[test]
    fn test_sell_exhausts_liquidity() {
        let model = DepthWalkSlippage::default();
        let s = model.estimate(&single_level_book(), 20.0, TradeSide::Sell).unwrap();

        // 10 @ 100 + 10 @ 98 -> avg 99
        assert_relative_eq!(s, (1.0 - 99.0 / 100.5) * 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_custom_penalty() {
        let model = DepthWalkSlippage::new(0.0);
        let s = model.estimate(&single_level_book(), 20.0, TradeSide::Buy).unwrap();
        assert_relative_eq!(s, (101.0 / 100.5 - 1.0) * 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_walk_ladder_partial() {
        let book = single_level_book();
        let fill = walk_ladder(&book.asks, 15.0);
        assert_relative_eq!(fill.filled, 10.0);
        assert_relative_eq!(fill.remaining, 5.0);
        assert_relative_eq!(fill.notional, 1010.0);
    }

    #[test]
    fn test_no_slippage() {
        let model = NoSlippage;
        let s = model.estimate(&single_level_book(), 50.0, TradeSide::Buy).unwrap();
        assert_relative_eq!(s, 0.0);
        assert_eq!(model.name(), "NoSlippage");
    }
}
