//! Currency codes accepted by the Retail Prices API.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Billing currencies the upstream API can quote in.
///
/// The API prices in USD unless a `currencyCode` parameter is supplied;
/// this is the enumerated set the gateway forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Currency {
    /// United States Dollar
    #[default]
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Canadian Dollar
    CAD,
    /// Australian Dollar
    AUD,
    /// Indian Rupee
    INR,
    /// Chinese Yuan Renminbi
    CNY,
    /// Brazilian Real
    BRL,
}

impl Currency {
    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::INR => "INR",
            Currency::CNY => "CNY",
            Currency::BRL => "BRL",
        }
    }

    /// Returns the display symbol.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CAD => "C$",
            Currency::AUD => "A$",
            Currency::INR => "₹",
            Currency::CNY => "¥",
            Currency::BRL => "R$",
        }
    }

    /// Display precision for unit prices in this currency.
    ///
    /// Unit prices are small fractions of a currency unit, so four places
    /// are shown; JPY has no fractional unit at all.
    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 4,
        }
    }

    /// Parses a currency from a 3-letter code, case-insensitively.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "CAD" => Ok(Currency::CAD),
            "AUD" => Ok(Currency::AUD),
            "INR" => Ok(Currency::INR),
            "CNY" => Ok(Currency::CNY),
            "BRL" => Ok(Currency::BRL),
            other => Err(CoreError::UnknownCurrency(other.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
