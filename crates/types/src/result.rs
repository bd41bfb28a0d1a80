/// Error information returned to callers
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorResult {
    /// Error category (`input`, `model`, `runtime`)
    pub category: String,
    /// Error message
    pub message: String,
    /// Additional error details
    #[serde(default)]
    pub details: serde_json::Value,
}

/// Error body sent over HTTP, shaped `{"detail": "..."}`
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    /// Human-readable failure description
    pub detail: String,
}

impl From<&ErrorResult> for ErrorDetail {
    fn from(err: &ErrorResult) -> Self {
        Self {
            detail: err.message.clone(),
        }
    }
}
