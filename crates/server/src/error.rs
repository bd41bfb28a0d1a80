//! Server error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tradesim_execution::ExecutionError;
use tradesim_simulator::SimulatorError;
use tradesim_types::{ErrorDetail, ErrorResult};

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Cost model could not be loaded
    #[error("cost model: {0}")]
    CostModel(#[from] ExecutionError),

    /// Logging could not be initialized
    #[error(transparent)]
    Simulator(#[from] SimulatorError),

    /// Socket bind or accept failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A failed `/simulate` call, rendered as `{"detail": "..."}`.
///
/// Caller faults map to 400, everything else to 500.
#[derive(Debug)]
pub struct ApiError(pub SimulatorError);

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        if self.0.is_input_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<SimulatorError> for ApiError {
    fn from(err: SimulatorError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let result = ErrorResult::from(self.0);
        (status, Json(ErrorDetail::from(&result))).into_response()
    }
}
