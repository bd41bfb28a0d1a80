/// Cost breakdown of a hypothetical trade
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    /// Average execution price vs. mid, in percent (positive = adverse)
    pub slippage_percent: f64,
    /// Square-root market impact, in percent
    pub market_impact_percent: f64,
    /// Absolute fee in quote units
    pub fees_absolute: f64,
    /// `(slippage + impact + fees) / 100 * order_size`
    pub net_transaction_cost: f64,
    /// Probability of resting as maker, in (0, 1)
    pub maker_probability: f64,
}

impl CostEstimate {
    /// Returns the first field holding a non-finite value, if any.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        [
            ("slippage_percent", self.slippage_percent),
            ("market_impact_percent", self.market_impact_percent),
            ("fees_absolute", self.fees_absolute),
            ("net_transaction_cost", self.net_transaction_cost),
            ("maker_probability", self.maker_probability),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
    }
}
