//! Cost model configuration loading from YAML.
//!
//! Every coefficient the estimators use is a fixed constant. They live here
//! instead of in the algorithms so a calibration step can replace them
//! without touching the models.

use crate::error::ExecutionError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tradesim_types::{DEFAULT_VOLATILITY, FeeTier};

/// Depth-walk slippage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlippageConfig {
    /// Premium charged on size the ladder cannot absorb (0.02 = 2%)
    #[serde(default = "default_exhaustion_penalty")]
    pub exhaustion_penalty: f64,
}

fn default_exhaustion_penalty() -> f64 {
    0.02
}

impl Default for SlippageConfig {
    fn default() -> Self {
        Self {
            exhaustion_penalty: default_exhaustion_penalty(),
        }
    }
}

/// Square-root impact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactConfig {
    /// Volatility used when the request omits one
    pub default_volatility: f64,
    /// Visible depth is treated as one hour of turnover, scaled by this
    pub hours_per_day: f64,
    /// Execution urgency multiplier (under the square root)
    pub urgency_factor: f64,
    /// Daily volume fallback as a multiple of order size when depth is zero
    pub zero_volume_multiplier: f64,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            default_volatility: DEFAULT_VOLATILITY,
            hours_per_day: 24.0,
            urgency_factor: 1.0,
            zero_volume_multiplier: 100.0,
        }
    }
}

/// Fee rate per tier, as a fraction of order size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    /// Standard rate (also the fallback)
    pub standard: f64,
    /// VIP 1 rate
    pub vip1: f64,
    /// VIP 2 rate
    pub vip2: f64,
    /// VIP 3 rate
    pub vip3: f64,
    /// Flat VIP rate
    pub vip: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            standard: 0.001,
            vip1: 0.0008,
            vip2: 0.0006,
            vip3: 0.0004,
            vip: 0.0005,
        }
    }
}

impl FeeSchedule {
    /// Rate for a tier.
    #[must_use]
    pub fn rate(&self, tier: FeeTier) -> f64 {
        match tier {
            FeeTier::Standard => self.standard,
            FeeTier::Vip1 => self.vip1,
            FeeTier::Vip2 => self.vip2,
            FeeTier::Vip3 => self.vip3,
            FeeTier::Vip => self.vip,
        }
    }

    fn rates(&self) -> [(&'static str, f64); 5] {
        [
            ("standard", self.standard),
            ("vip1", self.vip1),
            ("vip2", self.vip2),
            ("vip3", self.vip3),
            ("vip", self.vip),
        ]
    }
}

/// Logistic maker/taker weights and feature scales.
///
/// Not trained: these are heuristic constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MakerTakerConfig {
    /// Intercept (b0)
    pub intercept: f64,
    /// Weight on normalized spread (b1)
    pub spread_weight: f64,
    /// Weight on normalized book depth (b2)
    pub depth_weight: f64,
    /// Weight on normalized bid/ask liquidity ratio (b3)
    pub liquidity_weight: f64,
    /// Weight on normalized order size (b4)
    pub order_size_weight: f64,
    /// Spread at which the spread feature saturates
    pub spread_scale: f64,
    /// Level count at which the depth feature saturates
    pub depth_scale: f64,
    /// Cap on the liquidity ratio
    pub liquidity_cap: f64,
    /// Order size at which the size feature saturates
    pub order_size_scale: f64,
    /// Floor on ask-side volume in the liquidity ratio denominator
    pub min_ask_liquidity: f64,
}

impl Default for MakerTakerConfig {
    fn default() -> Self {
        Self {
            intercept: -0.5,
            spread_weight: 2.0,
            depth_weight: 0.01,
            liquidity_weight: 0.5,
            order_size_weight: -0.1,
            spread_scale: 10.0,
            depth_scale: 100.0,
            liquidity_cap: 2.0,
            order_size_scale: 10.0,
            min_ask_liquidity: 0.001,
        }
    }
}

/// Complete cost model configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostModelConfig {
    /// Slippage model
    #[serde(default)]
    pub slippage: SlippageConfig,
    /// Market impact model
    #[serde(default)]
    pub impact: ImpactConfig,
    /// Fee schedule
    #[serde(default)]
    pub fees: FeeSchedule,
    /// Maker/taker classifier
    #[serde(default)]
    pub maker_taker: MakerTakerConfig,
}

impl CostModelConfig {
    /// Loads the cost model configuration from a YAML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ExecutionError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Loads the cost model configuration from a YAML string.
    ///
    /// # Errors
    /// Returns an error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> Result<Self, ExecutionError> {
        let config: CostModelConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every coefficient keeps the models well defined.
    ///
    /// # Errors
    /// Returns [`ExecutionError::CostsConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ExecutionError> {
        let penalty = self.slippage.exhaustion_penalty;
        non_negative("slippage.exhaustion_penalty", penalty)?;
        // Sells price leftover size at worst_bid * (1 - penalty).
        if penalty >= 1.0 {
            return Err(ExecutionError::CostsConfig(format!(
                "slippage.exhaustion_penalty must be < 1, got {penalty}"
            )));
        }

        non_negative("impact.default_volatility", self.impact.default_volatility)?;
        positive("impact.hours_per_day", self.impact.hours_per_day)?;
        non_negative("impact.urgency_factor", self.impact.urgency_factor)?;
        positive("impact.zero_volume_multiplier", self.impact.zero_volume_multiplier)?;

        for (tier, rate) in self.fees.rates() {
            non_negative(&format!("fees.{tier}"), rate)?;
        }

        let mt = &self.maker_taker;
        for (name, weight) in [
            ("maker_taker.intercept", mt.intercept),
            ("maker_taker.spread_weight", mt.spread_weight),
            ("maker_taker.depth_weight", mt.depth_weight),
            ("maker_taker.liquidity_weight", mt.liquidity_weight),
            ("maker_taker.order_size_weight", mt.order_size_weight),
        ] {
            if !weight.is_finite() {
                return Err(ExecutionError::CostsConfig(format!(
                    "{name} must be finite, got {weight}"
                )));
            }
        }
        positive("maker_taker.spread_scale", mt.spread_scale)?;
        positive("maker_taker.depth_scale", mt.depth_scale)?;
        positive("maker_taker.liquidity_cap", mt.liquidity_cap)?;
        positive("maker_taker.order_size_scale", mt.order_size_scale)?;
        positive("maker_taker.min_ask_liquidity", mt.min_ask_liquidity)?;

        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<(), ExecutionError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ExecutionError::CostsConfig(format!(
            "{name} must be > 0, got {value}"
        )))
    }
}

fn non_negative(name: &str, value: f64) -> Result<(), ExecutionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ExecutionError::CostsConfig(format!(
            "{name} must be >= 0, got {value}"
        )))
    }
}
