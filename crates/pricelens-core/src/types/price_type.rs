//! Azure pricing tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Pricing tier reported by the upstream API in the item `type` field and
/// accepted by the `priceType` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum PriceType {
    /// Pay-as-you-go metered pricing.
    Consumption,
    /// Reserved-capacity pricing with an upfront term commitment.
    Reservation,
    /// Discounted consumption pricing for dev/test subscriptions.
    DevTestConsumption,
}

impl PriceType {
    /// Returns the wire string used in filters and item payloads.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceType::Consumption => "Consumption",
            PriceType::Reservation => "Reservation",
            PriceType::DevTestConsumption => "DevTestConsumption",
        }
    }

    /// Parses the upstream wire string.
    pub fn from_str_value(value: &str) -> Result<Self, CoreError> {
        match value {
            "Consumption" => Ok(PriceType::Consumption),
            "Reservation" => Ok(PriceType::Reservation),
            "DevTestConsumption" => Ok(PriceType::DevTestConsumption),
            other => Err(CoreError::UnknownPriceType(other.to_string())),
        }
    }
}

impl fmt::Display for PriceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
