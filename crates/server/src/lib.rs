//! Tradesim Server
//!
//! HTTP transport for the trade cost simulator:
//! - `GET /` health message
//! - `POST /simulate` cost estimate for one order-book snapshot
//!
//! Every response carries an `X-Process-Time` header (seconds). CORS is
//! fully open.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

pub mod config;
pub mod error;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tradesim_execution::CostEstimator;
use tradesim_simulator::{LatencyTimer, SimulatorError};
use tradesim_types::{SimulationRequest, SimulationResponse};

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};

/// Response header carrying handler wall time in seconds.
pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Stateless estimator shared by all requests
    pub estimator: Arc<CostEstimator>,
}

impl AppState {
    /// Wraps an estimator for sharing across handlers.
    #[must_use]
    pub fn new(estimator: CostEstimator) -> Self {
        Self {
            estimator: Arc::new(estimator),
        }
    }
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/simulate", post(simulate))
        .layer(middleware::from_fn(process_time))
        .layer(cors)
        .with_state(state)
}

/// `GET /`
pub async fn root() -> Json<Value> {
    Json(json!({"message": "GoQuant Trade Simulator API"}))
}

/// `POST /simulate`
///
/// The body is parsed here rather than through the `Json` extractor so that
/// malformed or non-UTF-8 bodies get the same 400 `{"detail"}` shape as
/// invalid books.
///
/// # Errors
/// Returns an [`ApiError`] rendered as 400 for caller faults, 500 otherwise.
pub async fn simulate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SimulationResponse>, ApiError> {
    let request: SimulationRequest = serde_json::from_slice(&body)
        .map_err(|e| SimulatorError::RequestParse(e.to_string()))
        .inspect_err(|err| tracing::error!("Error processing simulation request: {err}"))?;

    let response = tradesim_simulator::simulate(&state.estimator, &request)?;
    Ok(Json(response))
}

async fn process_time(request: Request, next: Next) -> Response {
    let timer = LatencyTimer::start();
    let mut response = next.run(request).await;

    let seconds = timer.elapsed_ms() / 1000.0;
    if let Ok(value) = HeaderValue::from_str(&seconds.to_string()) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }
    response
}
