//! High-level simulation runner helpers.

use tradesim_execution::CostEstimator;
use tradesim_types::{SimulationRequest, SimulationResponse};

use crate::error::SimulatorError;
use crate::timing::LatencyTimer;

/// Runs one simulation and attaches latency metrics.
///
/// # Errors
/// Returns [`SimulatorError::Execution`] when the estimator rejects the
/// snapshot or parameters, or a model degenerates.
pub fn simulate(
    estimator: &CostEstimator,
    request: &SimulationRequest,
) -> Result<SimulationResponse, SimulatorError> {
    let timer = LatencyTimer::start();

    let estimate = estimator
        .estimate(&request.orderbook, &request.parameters)
        .inspect_err(|err| tracing::error!("Error processing simulation request: {err}"))?;

    let latency = timer.finish(request.client_timestamp);

    tracing::info!(
        symbol = %request.parameters.symbol,
        server_processing_ms = latency.server_processing_time_ms,
        total_server_ms = latency.total_server_time_ms,
        "Simulation request processed - Server processing time: {:.2}ms, Total server time: {:.2}ms",
        latency.server_processing_time_ms,
        latency.total_server_time_ms
    );

    Ok(SimulationResponse::new(&estimate, latency))
}

/// Main entry point: receives request JSON, returns response JSON.
///
/// # Errors
/// - [`SimulatorError::RequestParse`] when JSON parsing fails.
/// - Any error from [`simulate`].
/// - [`SimulatorError::ResponseSerialize`] if the response cannot be encoded.
pub fn simulate_from_json(
    estimator: &CostEstimator,
    request_json: &str,
) -> Result<String, SimulatorError> {
    let request: SimulationRequest = serde_json::from_str(request_json)
        .map_err(|e| SimulatorError::RequestParse(e.to_string()))?;

    let response = simulate(estimator, &request)?;

    serde_json::to_string(&response).map_err(|e| SimulatorError::ResponseSerialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tradesim_types::{OrderBookSnapshot, TradeParameters};

    fn request(order_size: f64) -> SimulationRequest {
        SimulationRequest {
            orderbook: OrderBookSnapshot::from_ladders(&[(100.0, 10.0)], &[(101.0, 10.0)], 0)
                .unwrap(),
            parameters: TradeParameters::new("BTC-USDT", order_size),
            client_timestamp: 0,
        }
    }

    #[test]
    fn test_simulate_fills_response() {
        let estimator = CostEstimator::default();
        let response = simulate(&estimator, &request(5.0)).unwrap();

        assert_relative_eq!(response.fees, 0.005, epsilon = 1e-12);
        assert_relative_eq!(response.slippage, (101.0 / 100.5 - 1.0) * 100.0, epsilon = 1e-10);
        assert!(response.latency_metrics.server_processing_time_ms >= 0.0);
        assert_relative_eq!(
            response.processing_latency,
            response.latency_metrics.server_processing_time_ms
        );
        // Client timestamp at the epoch: total time is roughly "now"
        assert!(response.latency_metrics.total_server_time_ms > 1.0e12);
    }

    #[test]
    fn test_simulate_rejects_empty_book_side() {
        let estimator = CostEstimator::default();
        let mut req = request(5.0);
        req.orderbook.bids.clear();

        let err = simulate(&estimator, &req).unwrap_err();
        assert!(err.is_input_error());
        assert_eq!(err.error_category(), "input");
    }

    #[test]
    fn test_simulate_from_json_parse_error() {
        let estimator = CostEstimator::default();
        let err = simulate_from_json(&estimator, "{not json").unwrap_err();
        assert!(matches!(err, SimulatorError::RequestParse(_)));
    }
}
