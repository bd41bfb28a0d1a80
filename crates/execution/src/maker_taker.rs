//! Maker/taker fill classification.
//!
//! A logistic score over four bounded book features. The weights are fixed
//! heuristics from [`MakerTakerConfig`], not a trained model.

use crate::costs::MakerTakerConfig;
use tradesim_types::OrderBookSnapshot;

/// Trait for maker/taker probability models.
pub trait MakerTakerModel: Send + Sync {
    /// Probability that the order rests as maker, in (0, 1).
    fn maker_probability(&self, book: &OrderBookSnapshot, order_size: f64) -> f64;

    /// Returns the model name for logging/debugging.
    fn name(&self) -> &'static str;
}

/// Normalized inputs of the logistic score, each within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakerTakerFeatures {
    /// `min(spread / spread_scale, 1)`
    pub spread: f64,
    /// `min(level_count / depth_scale, 1)`
    pub depth: f64,
    /// `min(bid_volume / ask_volume, cap) / cap`
    pub liquidity: f64,
    /// `min(order_size / order_size_scale, 1)`
    pub order_size: f64,
}

/// Logistic-regression style classifier with fixed coefficients.
#[derive(Debug, Clone, Default)]
pub struct LogisticMakerTaker {
    /// Weights and feature scales
    pub config: MakerTakerConfig,
}

impl LogisticMakerTaker {
    /// Creates a classifier from its coefficients.
    #[must_use]
    pub fn new(config: MakerTakerConfig) -> Self {
        Self { config }
    }

    /// Extracts the normalized features from a snapshot.
    #[must_use]
    pub fn features(&self, book: &OrderBookSnapshot, order_size: f64) -> MakerTakerFeatures {
        let cfg = &self.config;

        #[allow(clippy::cast_precision_loss)]
        let levels = book.level_count() as f64;
        let liquidity_ratio = book.bid_volume() / book.ask_volume().max(cfg.min_ask_liquidity);

        MakerTakerFeatures {
            spread: (book.spread / cfg.spread_scale).min(1.0),
            depth: (levels / cfg.depth_scale).min(1.0),
            liquidity: liquidity_ratio.min(cfg.liquidity_cap) / cfg.liquidity_cap,
            order_size: (order_size / cfg.order_size_scale).min(1.0),
        }
    }

    /// Linear score `z` of the logistic function.
    #[must_use]
    pub fn score(&self, features: &MakerTakerFeatures) -> f64 {
        let cfg = &self.config;
        cfg.intercept
            + cfg.spread_weight * features.spread
            + cfg.depth_weight * features.depth
            + cfg.liquidity_weight * features.liquidity
            + cfg.order_size_weight * features.order_size
    }
}

/// Standard logistic function.
#[must_use]
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl MakerTakerModel for LogisticMakerTaker {
    fn maker_probability(&self, book: &OrderBookSnapshot, order_size: f64) -> f64 {
        let features = self.features(book, order_size);
        let z = self.score(&features);

        // Large configured weights can saturate to exactly 0 or 1 in f64.
        sigmoid(z).clamp(f64::EPSILON, 1.0 - f64::EPSILON)
    }

    fn name(&self) -> &'static str {
        "LogisticMakerTaker"
    }
}
