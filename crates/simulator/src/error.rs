//! Simulator error types.

use serde_json::json;
use thiserror::Error;
use tradesim_execution::ExecutionError;
use tradesim_types::ErrorResult;

/// Errors that can occur while serving a simulation request.
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// JSON request parse error
    #[error("request parse error: {0}")]
    RequestParse(String),

    /// Response serialization error
    #[error("response serialization error: {0}")]
    ResponseSerialize(String),

    /// Cost estimation error
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// Logging initialization error
    #[error("logging setup error: {0}")]
    Logging(String),
}

impl SimulatorError {
    /// Returns true if the request itself was at fault.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        match self {
            SimulatorError::RequestParse(_) => true,
            SimulatorError::Execution(err) => err.is_input_error(),
            _ => false,
        }
    }

    /// Returns the error category for the output contract.
    /// Categories: `input`, `model`, `config`, `runtime`
    #[must_use]
    pub fn error_category(&self) -> &'static str {
        match self {
            // Caller supplied a bad request
            SimulatorError::RequestParse(_)
            | SimulatorError::Execution(ExecutionError::InvalidInput(_)) => "input",

            // A model produced an unusable value
            SimulatorError::Execution(ExecutionError::ArithmeticDegenerate(_)) => "model",

            // Cost model or logging configuration
            SimulatorError::Execution(
                ExecutionError::CostsConfig(_)
                | ExecutionError::YamlParse(_)
                | ExecutionError::Io(_),
            )
            | SimulatorError::Logging(_) => "config",

            SimulatorError::ResponseSerialize(_) => "runtime",
        }
    }
}

impl From<SimulatorError> for ErrorResult {
    fn from(err: SimulatorError) -> Self {
        Self {
            category: err.error_category().to_string(),
            message: err.to_string(),
            details: json!({}),
        }
    }
}
