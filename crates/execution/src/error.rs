//! Error types for the execution crate.

use thiserror::Error;
use tradesim_types::CoreError;

/// Errors that can occur while estimating trade costs.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// Snapshot or parameters violate a precondition
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A model produced a non-finite value
    #[error("arithmetic degenerate: {0}")]
    ArithmeticDegenerate(String),

    /// Cost model configuration error
    #[error("costs config error: {0}")]
    CostsConfig(String),

    /// YAML parsing error
    #[error("yaml parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExecutionError {
    /// Returns true if the caller supplied bad input.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, ExecutionError::InvalidInput(_))
    }
}

impl From<CoreError> for ExecutionError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) => ExecutionError::InvalidInput(msg),
            CoreError::ArithmeticDegenerate(msg) => ExecutionError::ArithmeticDegenerate(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_invalid_input_maps_flat() {
        let err: ExecutionError = CoreError::invalid("bid side is empty").into();
        assert!(err.is_input_error());
        assert_eq!(err.to_string(), "invalid input: bid side is empty");
    }

    #[test]
    fn test_degenerate_is_not_input_error() {
        let err = ExecutionError::ArithmeticDegenerate("nan".to_string());
        assert!(!err.is_input_error());
    }
}
