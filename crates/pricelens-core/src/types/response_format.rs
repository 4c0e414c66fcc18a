//! Output format selection for tool responses.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Output format for tool responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable markdown.
    #[default]
    Markdown,
    /// Machine-readable pretty-printed JSON.
    Json,
}

impl ResponseFormat {
    /// Returns the lowercase wire string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Markdown => "markdown",
            ResponseFormat::Json => "json",
        }
    }

    /// Parses the lowercase wire string.
    pub fn from_str_value(value: &str) -> Result<Self, CoreError> {
        match value {
            "markdown" => Ok(ResponseFormat::Markdown),
            "json" => Ok(ResponseFormat::Json),
            other => Err(CoreError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
