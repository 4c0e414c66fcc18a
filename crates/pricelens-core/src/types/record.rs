//! Wire-faithful price item types.
//!
//! Field names mirror the upstream JSON exactly (camelCase); the gateway
//! neither validates nor enriches what the API reports. Absent fields
//! default so schema drift upstream cannot fail a whole page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A savings-plan rate attached to a price item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsPlanRate {
    /// Discounted unit price under the plan.
    #[serde(default)]
    pub unit_price: f64,
    /// Discounted retail price under the plan.
    #[serde(default)]
    pub retail_price: f64,
    /// Commitment term, e.g. "1 Year" or "3 Years".
    #[serde(default)]
    pub term: String,
}

/// One price item as reported by the Retail Prices API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    /// Billing currency of the quoted prices.
    #[serde(default)]
    pub currency_code: String,
    /// Minimum units for tiered pricing.
    #[serde(default)]
    pub tier_minimum_units: f64,
    /// Retail (list) price per unit.
    #[serde(default)]
    pub retail_price: f64,
    /// Discounted unit price, when applicable.
    #[serde(default)]
    pub unit_price: f64,
    /// ARM region name, e.g. "eastus".
    #[serde(default)]
    pub arm_region_name: String,
    /// Human-readable region, e.g. "US East".
    #[serde(default)]
    pub location: String,
    /// Date the price became effective.
    #[serde(default)]
    pub effective_start_date: Option<DateTime<Utc>>,
    /// Meter identifier.
    #[serde(default)]
    pub meter_id: String,
    /// Meter display name.
    #[serde(default)]
    pub meter_name: String,
    /// Product identifier.
    #[serde(default)]
    pub product_id: String,
    /// SKU identifier.
    #[serde(default)]
    pub sku_id: String,
    /// Product display name.
    #[serde(default)]
    pub product_name: String,
    /// SKU display name, e.g. "Standard_D2s_v3".
    #[serde(default)]
    pub sku_name: String,
    /// Service display name, e.g. "Virtual Machines".
    #[serde(default)]
    pub service_name: String,
    /// Service identifier.
    #[serde(default)]
    pub service_id: String,
    /// Service family, e.g. "Compute".
    #[serde(default)]
    pub service_family: String,
    /// Billing unit, e.g. "1 Hour".
    #[serde(default)]
    pub unit_of_measure: String,
    /// Price type string ("Consumption", "Reservation", ...).
    #[serde(rename = "type", default)]
    pub price_type: String,
    /// Whether this region is the primary meter region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_primary_meter_region: Option<bool>,
    /// ARM SKU name.
    #[serde(default)]
    pub arm_sku_name: String,
    /// Reservation term, for reservation-type items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_term: Option<String>,
    /// Savings-plan rates, when the item is plan-eligible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_plan: Option<Vec<SavingsPlanRate>>,
}

impl PriceRecord {
    /// Returns true when the item carries at least one savings-plan rate.
    #[must_use]
    pub fn has_savings_plan(&self) -> bool {
        self.savings_plan.as_ref().is_some_and(|p| !p.is_empty())
    }
}
