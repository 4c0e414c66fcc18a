//! Error types for response shaping.

use thiserror::Error;

/// Result type for response shaping operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors produced while rendering responses.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// JSON serialization of a response envelope failed.
    #[error("failed to serialize response: {0}")]
    Json(#[from] serde_json::Error),
}
