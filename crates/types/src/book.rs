//! Order-book snapshot types.
//!
//! A snapshot is a point-in-time view of both ladders. It is built fresh per
//! request, validated once, and then only read by the estimators.

use crate::error::CoreError;
use crate::params::TradeSide;

/// A single price level of one ladder.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrderBookLevel {
    /// Level price (> 0)
    pub price: f64,
    /// Quantity available at this price (>= 0)
    pub size: f64,
    /// Running sum of size from the best price down to this level
    #[serde(rename = "total")]
    pub cumulative_total: f64,
    /// Share of the side's visible depth held by this level, in percent
    #[serde(rename = "percentage")]
    pub percentage_of_depth: f64,
}

impl OrderBookLevel {
    /// Creates a level with explicit cumulative and percentage figures.
    #[must_use]
    pub fn new(price: f64, size: f64, cumulative_total: f64, percentage_of_depth: f64) -> Self {
        Self {
            price,
            size,
            cumulative_total,
            percentage_of_depth,
        }
    }
}

/// Point-in-time bid/ask ladders.
///
/// Bids are sorted best (highest) first, asks best (lowest) first.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookSnapshot {
    /// Bid ladder, strictly descending by price
    pub bids: Vec<OrderBookLevel>,
    /// Ask ladder, strictly ascending by price
    pub asks: Vec<OrderBookLevel>,
    /// Best ask minus best bid
    pub spread: f64,
    /// Spread relative to the mid price, in percent
    pub spread_percentage: f64,
    /// Capture time in milliseconds since epoch
    pub timestamp: i64,
}

impl OrderBookSnapshot {
    /// Builds a validated snapshot from raw `(price, size)` ladders.
    ///
    /// Cumulative totals, depth percentages, spread and spread percentage are
    /// derived from the ladders.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidInput`] if the resulting book violates any
    /// snapshot invariant.
    pub fn from_ladders(
        bids: &[(f64, f64)],
        asks: &[(f64, f64)],
        timestamp: i64,
    ) -> Result<Self, CoreError> {
        let bids = build_ladder(bids);
        let asks = build_ladder(asks);

        let (spread, spread_percentage) = match (bids.first(), asks.first()) {
            (Some(bid), Some(ask)) => {
                let spread = ask.price - bid.price;
                let mid = (ask.price + bid.price) / 2.0;
                (spread, spread / mid * 100.0)
            }
            _ => (0.0, 0.0),
        };

        let snapshot = Self {
            bids,
            asks,
            spread,
            spread_percentage,
            timestamp,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Checks the structural invariants every estimator relies on.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidInput`] when a side is empty, a ladder is
    /// not strictly monotonic, a level carries a non-finite or out-of-range
    /// value, the book is crossed or locked, or the spread is invalid.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_ladder("bid", &self.bids, |prev, next| next < prev)?;
        validate_ladder("ask", &self.asks, |prev, next| next > prev)?;

        let best_bid = self.bids[0].price;
        let best_ask = self.asks[0].price;
        if best_ask <= best_bid {
            return Err(CoreError::invalid(format!(
                "crossed book: best ask {best_ask} <= best bid {best_bid}"
            )));
        }

        if !self.spread.is_finite() || self.spread < 0.0 {
            return Err(CoreError::invalid(format!(
                "spread must be finite and >= 0, got {}",
                self.spread
            )));
        }

        Ok(())
    }

    /// Best (highest) bid level.
    #[must_use]
    pub fn best_bid(&self) -> Option<&OrderBookLevel> {
        self.bids.first()
    }

    /// Best (lowest) ask level.
    #[must_use]
    pub fn best_ask(&self) -> Option<&OrderBookLevel> {
        self.asks.first()
    }

    /// Mid price between best bid and best ask.
    #[must_use]
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((ask.price + bid.price) / 2.0),
            _ => None,
        }
    }

    /// Ladder an aggressive order of the given side consumes.
    ///
    /// Buys lift the asks, sells hit the bids.
    #[must_use]
    pub fn opposite_ladder(&self, side: TradeSide) -> &[OrderBookLevel] {
        match side {
            TradeSide::Buy => &self.asks,
            TradeSide::Sell => &self.bids,
        }
    }

    /// Sum of level sizes on the bid side.
    #[must_use]
    pub fn bid_volume(&self) -> f64 {
        self.bids.iter().map(|l| l.size).sum()
    }

    /// Sum of level sizes on the ask side.
    #[must_use]
    pub fn ask_volume(&self) -> f64 {
        self.asks.iter().map(|l| l.size).sum()
    }

    /// Sum of cumulative totals over both ladders.
    #[must_use]
    pub fn cumulative_depth(&self) -> f64 {
        self.bids
            .iter()
            .chain(self.asks.iter())
            .map(|l| l.cumulative_total)
            .sum()
    }

    /// Number of levels across both ladders.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.bids.len() + self.asks.len()
    }
}

fn build_ladder(levels: &[(f64, f64)]) -> Vec<OrderBookLevel> {
    let side_total: f64 = levels.iter().map(|(_, size)| size).sum();
    let mut running = 0.0;

    levels
        .iter()
        .map(|&(price, size)| {
            running += size;
            let pct = if side_total > 0.0 {
                size / side_total * 100.0
            } else {
                0.0
            };
            OrderBookLevel::new(price, size, running, pct)
        })
        .collect()
}

fn validate_ladder(
    side: &str,
    levels: &[OrderBookLevel],
    in_order: impl Fn(f64, f64) -> bool,
) -> Result<(), CoreError> {
    if levels.is_empty() {
        return Err(CoreError::invalid(format!("{side} side is empty")));
    }

    for (idx, level) in levels.iter().enumerate() {
        if !level.price.is_finite() || level.price <= 0.0 {
            return Err(CoreError::invalid(format!(
                "{side} level {idx}: price must be finite and > 0, got {}",
                level.price
            )));
        }
        if !level.size.is_finite() || level.size < 0.0 {
            return Err(CoreError::invalid(format!(
                "{side} level {idx}: size must be finite and >= 0, got {}",
                level.size
            )));
        }
        if !level.cumulative_total.is_finite() || level.cumulative_total < 0.0 {
            return Err(CoreError::invalid(format!(
                "{side} level {idx}: total must be finite and >= 0, got {}",
                level.cumulative_total
            )));
        }
    }

    if let Some(idx) = levels
        .windows(2)
        .position(|pair| !in_order(pair[0].price, pair[1].price))
    {
        return Err(CoreError::invalid(format!(
            "{side} ladder not strictly monotonic at level {}",
            idx + 1
        )));
    }

    Ok(())
}
