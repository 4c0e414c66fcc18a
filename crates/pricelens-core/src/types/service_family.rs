//! Common Azure service families.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Service families accepted by the `serviceFamily` filter.
///
/// The upstream API reports more families than these, but this is the set
/// exposed as an enumerated tool parameter; records from other families
/// still pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum ServiceFamily {
    /// Compute
    Compute,
    /// Networking
    Networking,
    /// Storage
    Storage,
    /// Databases
    Databases,
    /// Analytics
    Analytics,
    /// AI + Machine Learning
    #[serde(rename = "AI + Machine Learning")]
    AiMachineLearning,
    /// Containers
    Containers,
    /// Security
    Security,
    /// Management and Governance
    #[serde(rename = "Management and Governance")]
    Management,
    /// Developer Tools
    #[serde(rename = "Developer Tools")]
    DeveloperTools,
}

impl ServiceFamily {
    /// Returns the wire string used in filters and item payloads.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceFamily::Compute => "Compute",
            ServiceFamily::Networking => "Networking",
            ServiceFamily::Storage => "Storage",
            ServiceFamily::Databases => "Databases",
            ServiceFamily::Analytics => "Analytics",
            ServiceFamily::AiMachineLearning => "AI + Machine Learning",
            ServiceFamily::Containers => "Containers",
            ServiceFamily::Security => "Security",
            ServiceFamily::Management => "Management and Governance",
            ServiceFamily::DeveloperTools => "Developer Tools",
        }
    }

    /// Parses the upstream wire string.
    pub fn from_str_value(value: &str) -> Result<Self, CoreError> {
        match value {
            "Compute" => Ok(ServiceFamily::Compute),
            "Networking" => Ok(ServiceFamily::Networking),
            "Storage" => Ok(ServiceFamily::Storage),
            "Databases" => Ok(ServiceFamily::Databases),
            "Analytics" => Ok(ServiceFamily::Analytics),
            "AI + Machine Learning" => Ok(ServiceFamily::AiMachineLearning),
            "Containers" => Ok(ServiceFamily::Containers),
            "Security" => Ok(ServiceFamily::Security),
            "Management and Governance" => Ok(ServiceFamily::Management),
            "Developer Tools" => Ok(ServiceFamily::DeveloperTools),
            other => Err(CoreError::UnknownServiceFamily(other.to_string())),
        }
    }
}

impl fmt::Display for ServiceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
