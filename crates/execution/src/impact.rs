//! Market impact models.
//!
//! Impact is the price move the trade itself causes. The square-root model
//! scales volatility by the square root of the traded fraction of daily volume.

use tradesim_types::OrderBookSnapshot;

/// Trait for market impact models.
pub trait MarketImpactModel: Send + Sync {
    /// Estimates impact in percent.
    ///
    /// # Arguments
    /// * `book` - Validated order-book snapshot
    /// * `order_size` - Quantity to trade
    /// * `volatility` - Volatility of the instrument (e.g., 0.02)
    fn estimate(&self, book: &OrderBookSnapshot, order_size: f64, volatility: f64) -> f64;

    /// Returns the model name for logging/debugging.
    fn name(&self) -> &'static str;
}

/// Almgren-Chriss style square-root impact.
///
/// `impact = volatility * sqrt(order_size / daily_volume) * sqrt(urgency)`,
/// with daily volume inferred from visible depth.
#[derive(Debug, Clone)]
pub struct SquareRootImpact {
    /// Multiplier turning visible depth into daily volume
    pub hours_per_day: f64,
    /// Urgency multiplier (fixed; the request's urgency hint is not used)
    pub urgency_factor: f64,
    /// Fallback daily volume as a multiple of order size
    pub zero_volume_multiplier: f64,
}

impl SquareRootImpact {
    /// Creates a new square-root impact model.
    #[must_use]
    pub fn new(hours_per_day: f64, urgency_factor: f64, zero_volume_multiplier: f64) -> Self {
        Self {
            hours_per_day,
            urgency_factor,
            zero_volume_multiplier,
        }
    }

    /// Daily volume proxy: all cumulative level totals, scaled to a day.
    #[must_use]
    pub fn estimated_daily_volume(&self, book: &OrderBookSnapshot, order_size: f64) -> f64 {
        let volume = book.cumulative_depth() * self.hours_per_day;
        if volume == 0.0 {
            order_size * self.zero_volume_multiplier
        } else {
            volume
        }
    }
}

impl Default for SquareRootImpact {
    fn default() -> Self {
        Self::new(24.0, 1.0, 100.0)
    }
}

impl MarketImpactModel for SquareRootImpact {
    fn estimate(&self, book: &OrderBookSnapshot, order_size: f64, volatility: f64) -> f64 {
        // Zero size with zero depth would otherwise divide 0 by 0.
        if order_size <= 0.0 {
            return 0.0;
        }

        let daily_volume = self.estimated_daily_volume(book, order_size);
        let impact =
            volatility * (order_size / daily_volume).sqrt() * self.urgency_factor.sqrt();

        impact * 100.0
    }

    fn name(&self) -> &'static str {
        "SquareRootImpact"
    }
}
