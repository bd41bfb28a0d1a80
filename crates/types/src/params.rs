use std::fmt;

use crate::error::CoreError;

/// Volatility assumed when the caller does not supply one.
pub const DEFAULT_VOLATILITY: f64 = 0.02;

/// Side of the hypothetical trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSide {
    /// Buy, consumes the ask ladder
    #[default]
    Buy,
    /// Sell, consumes the bid ladder
    Sell,
}

/// Fee discount bracket.
///
/// Parsing is case-insensitive and never fails: unknown names map to
/// [`FeeTier::Standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum FeeTier {
    /// Base rate
    #[default]
    Standard,
    /// VIP level 1
    Vip1,
    /// VIP level 2
    Vip2,
    /// VIP level 3
    Vip3,
    /// Flat VIP bracket
    Vip,
}

impl FeeTier {
    /// Resolves a tier name, falling back to `Standard` for anything unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "vip1" => Self::Vip1,
            "vip2" => Self::Vip2,
            "vip3" => Self::Vip3,
            "vip" => Self::Vip,
            _ => Self::Standard,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Vip1 => "vip1",
            Self::Vip2 => "vip2",
            Self::Vip3 => "vip3",
            Self::Vip => "vip",
        }
    }
}

impl From<String> for FeeTier {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<&str> for FeeTier {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied parameters of the hypothetical trade
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeParameters {
    /// Instrument identifier (opaque)
    pub symbol: String,
    /// Quantity to trade; 0 yields zero cost
    pub order_size: f64,
    /// Fee bracket
    #[serde(default)]
    pub fee_tier: FeeTier,
    /// Execution strategy name, passed through untouched
    #[serde(default)]
    pub execution_strategy: String,
    /// Volatility estimate (defaults to [`DEFAULT_VOLATILITY`])
    #[serde(default)]
    pub volatility: Option<f64>,
    /// Urgency hint, passed through untouched
    #[serde(default)]
    pub urgency: Option<String>,
    /// Trade side
    #[serde(default)]
    pub side: TradeSide,
}

impl TradeParameters {
    /// Creates buy-side parameters with the standard tier and no optional hints.
    #[must_use]
    pub fn new(symbol: impl Into<String>, order_size: f64) -> Self {
        Self {
            symbol: symbol.into(),
            order_size,
            fee_tier: FeeTier::Standard,
            execution_strategy: String::new(),
            volatility: None,
            urgency: None,
            side: TradeSide::Buy,
        }
    }

    /// Returns the supplied volatility or the given default.
    #[must_use]
    pub fn volatility_or(&self, default: f64) -> f64 {
        self.volatility.unwrap_or(default)
    }

    /// Checks numeric preconditions of the parameters.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidInput`] if the order size is negative or
    /// non-finite, or a supplied volatility is negative or non-finite.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.order_size.is_finite() || self.order_size < 0.0 {
            return Err(CoreError::invalid(format!(
                "orderSize must be finite and >= 0, got {}",
                self.order_size
            )));
        }
        if let Some(vol) = self.volatility
            && (!vol.is_finite() || vol < 0.0)
        {
            return Err(CoreError::invalid(format!(
                "volatility must be finite and >= 0, got {vol}"
            )));
        }
        Ok(())
    }
}
