//! Error types for the Pricelens core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors produced while interpreting caller-supplied parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Currency code is not in the supported set.
    #[error("unsupported currency code: {0}")]
    UnknownCurrency(String),

    /// Price type string is not recognized.
    #[error("unknown price type: {0}")]
    UnknownPriceType(String),

    /// Service family string is not recognized.
    #[error("unknown service family: {0}")]
    UnknownServiceFamily(String),

    /// Response format string is not recognized.
    #[error("unknown response format: {0} (expected 'markdown' or 'json')")]
    UnknownFormat(String),

    /// Result limit is outside the accepted range.
    #[error("limit {value} out of range ({min}-{max})")]
    InvalidLimit {
        /// The rejected value.
        value: usize,
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },

    /// A text or list parameter failed its length bounds.
    #[error("{field} must be between {min} and {max} in length (got {len})")]
    FieldLength {
        /// Name of the offending parameter.
        field: &'static str,
        /// Observed length.
        len: usize,
        /// Smallest accepted length.
        min: usize,
        /// Largest accepted length.
        max: usize,
    },
}
