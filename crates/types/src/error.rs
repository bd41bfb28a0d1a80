use thiserror::Error;

/// Core error types for the trade simulator
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input violates a structural precondition (empty ladder, crossed book, ...)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A computation produced a non-finite value
    #[error("arithmetic degenerate: {0}")]
    ArithmeticDegenerate(String),
}

impl CoreError {
    /// Shorthand for an [`CoreError::InvalidInput`] with a formatted message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
