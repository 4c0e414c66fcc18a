//! Error types for pricing API requests.

use thiserror::Error;

/// Result type for pricing API requests.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while querying the Retail Prices API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("network error contacting the pricing API: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("pricing API returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, relayed for diagnostics.
        message: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("invalid JSON from the pricing API: {0}")]
    Json(#[from] serde_json::Error),

    /// The continuation link from a page did not parse as a URL.
    #[error("invalid continuation link: {0}")]
    InvalidContinuation(#[from] url::ParseError),
}

impl ClientError {
    /// True when the failure originated upstream rather than locally.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, ClientError::Api { .. } | ClientError::Json(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let err = ClientError::Api {
            status: 400,
            message: "bad $filter".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "pricing API returned 400: bad $filter"
        );
        assert!(err.is_upstream());
    }
}
