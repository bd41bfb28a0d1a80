use crate::book::OrderBookSnapshot;
use crate::estimate::CostEstimate;
use crate::params::TradeParameters;

/// Incoming simulation request
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Order-book snapshot to simulate against
    pub orderbook: OrderBookSnapshot,
    /// Trade parameters
    pub parameters: TradeParameters,
    /// Client send time in milliseconds since epoch
    pub client_timestamp: i64,
}

/// Server-side latency figures, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyMetrics {
    /// Time spent computing the estimate
    #[serde(rename = "serverProcessingTime")]
    pub server_processing_time_ms: f64,
    /// Time from client send to response assembly
    #[serde(rename = "totalServerTime")]
    pub total_server_time_ms: f64,
}

/// Outgoing simulation response
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse {
    /// Slippage in percent
    pub slippage: f64,
    /// Market impact in percent
    pub market_impact: f64,
    /// Absolute fees
    pub fees: f64,
    /// Net transaction cost
    pub net_transaction_cost: f64,
    /// Same as `latency_metrics.server_processing_time_ms`
    pub processing_latency: f64,
    /// Maker fill probability
    pub maker_taker_probability: f64,
    /// Latency breakdown
    pub latency_metrics: LatencyMetrics,
}

impl SimulationResponse {
    /// Assembles a response from an estimate and its timing.
    #[must_use]
    pub fn new(estimate: &CostEstimate, latency: LatencyMetrics) -> Self {
        Self {
            slippage: estimate.slippage_percent,
            market_impact: estimate.market_impact_percent,
            fees: estimate.fees_absolute,
            net_transaction_cost: estimate.net_transaction_cost,
            processing_latency: latency.server_processing_time_ms,
            maker_taker_probability: estimate.maker_probability,
            latency_metrics: latency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let json = r#"{
            "orderbook": {
                "bids": [{"price": 100.0, "size": 10.0, "total": 10.0, "percentage": 100.0}],
                "asks": [{"price": 101.0, "size": 10.0, "total": 10.0, "percentage": 100.0}],
                "spread": 1.0,
                "spreadPercentage": 0.995,
                "timestamp": 1700000000000
            },
            "parameters": {
                "symbol": "BTC-USDT",
                "orderSize": 5.0,
                "feeTier": "standard",
                "executionStrategy": "market"
            },
            "clientTimestamp": 1700000000123
        }"#;

        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.client_timestamp, 1_700_000_000_123);
        assert_eq!(request.orderbook.asks.len(), 1);
        assert_eq!(request.parameters.symbol, "BTC-USDT");
    }

    #[test]
    fn test_response_wire_format() {
        let estimate = CostEstimate {
            slippage_percent: 0.5,
            market_impact_percent: 0.2,
            fees_absolute: 0.005,
            net_transaction_cost: 0.035,
            maker_probability: 0.47,
        };
        let latency = LatencyMetrics {
            server_processing_time_ms: 0.1,
            total_server_time_ms: 3.0,
        };

        let value = serde_json::to_value(SimulationResponse::new(&estimate, latency)).unwrap();
        assert_eq!(value["marketImpact"], 0.2);
        assert_eq!(value["makerTakerProbability"], 0.47);
        assert_eq!(value["processingLatency"], 0.1);
        assert_eq!(value["latencyMetrics"]["serverProcessingTime"], 0.1);
        assert_eq!(value["latencyMetrics"]["totalServerTime"], 3.0);
    }
}
