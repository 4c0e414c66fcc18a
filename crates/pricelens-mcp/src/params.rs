//! Tool parameter types.
//!
//! Each tool takes one struct; the schemars derives publish the field docs
//! as the tool's input schema. Range and length checks run before any
//! upstream request.

use rmcp::schemars::JsonSchema;
use rmcp::serde::Deserialize;

use pricelens_core::error::{CoreError, CoreResult};
use pricelens_core::limits::{validate_limit, DEFAULT_LIMIT, MAX_LIMIT};
use pricelens_core::types::{Currency, PriceType, ResponseFormat, ServiceFamily};

/// Longest accepted service or SKU name.
const MAX_NAME_LEN: usize = 100;

/// Longest accepted region name.
const MAX_REGION_LEN: usize = 50;

/// Largest service-family listing.
const MAX_FAMILY_LIMIT: usize = 500;

/// Fewest regions a comparison accepts.
pub const MIN_COMPARE_REGIONS: usize = 2;

/// Most regions a comparison accepts.
pub const MAX_COMPARE_REGIONS: usize = 10;

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_true() -> bool {
    true
}

fn default_consumption() -> Option<PriceType> {
    Some(PriceType::Consumption)
}

fn check_len(field: &'static str, value: &str, max: usize) -> CoreResult<()> {
    if value.len() > max {
        return Err(CoreError::FieldLength {
            field,
            len: value.len(),
            min: 0,
            max,
        });
    }
    Ok(())
}

fn check_required(field: &'static str, value: &str, max: usize) -> CoreResult<()> {
    if value.is_empty() {
        return Err(CoreError::FieldLength {
            field,
            len: 0,
            min: 1,
            max,
        });
    }
    check_len(field, value, max)
}

/// Parameters for `azure_get_service_prices`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ServicePricesParams {
    /// Azure service name to filter by (e.g. "Virtual Machines", "Storage",
    /// "Azure SQL Database").
    #[serde(default)]
    pub service_name: Option<String>,
    /// Service family to filter by (e.g. "Compute", "Storage",
    /// "Networking").
    #[serde(default)]
    pub service_family: Option<ServiceFamily>,
    /// Azure region name to filter by (e.g. "eastus", "westeurope",
    /// "uksouth").
    #[serde(default)]
    pub region: Option<String>,
    /// SKU name to filter by (e.g. "Standard_D2s_v3").
    #[serde(default)]
    pub sku_name: Option<String>,
    /// Price type to filter by.
    #[serde(default)]
    pub price_type: Option<PriceType>,
    /// Currency code for pricing (default: USD).
    #[serde(default)]
    pub currency: Currency,
    /// Maximum number of results to return (1-1000).
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Output format: markdown for human-readable, json for
    /// machine-readable.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl ServicePricesParams {
    /// Validates ranges and lengths.
    pub fn validate(&self) -> CoreResult<()> {
        validate_limit(self.limit, 1, MAX_LIMIT)?;
        if let Some(name) = &self.service_name {
            check_len("service_name", name, MAX_NAME_LEN)?;
        }
        if let Some(region) = &self.region {
            check_len("region", region, MAX_REGION_LEN)?;
        }
        if let Some(sku) = &self.sku_name {
            check_len("sku_name", sku, MAX_NAME_LEN)?;
        }
        Ok(())
    }
}

/// Parameters for `azure_compare_region_prices`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RegionComparisonParams {
    /// Azure service name to compare (e.g. "Virtual Machines").
    pub service_name: String,
    /// Specific SKU to compare; all SKUs when omitted.
    #[serde(default)]
    pub sku_name: Option<String>,
    /// Azure region names to compare, 2 to 10 of them (e.g. ["eastus",
    /// "westeurope", "uksouth"]).
    pub regions: Vec<String>,
    /// Price type to compare (default: Consumption).
    #[serde(default = "default_consumption")]
    pub price_type: Option<PriceType>,
    /// Currency code for pricing (default: USD).
    #[serde(default)]
    pub currency: Currency,
    /// Output format: markdown for human-readable, json for
    /// machine-readable.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl RegionComparisonParams {
    /// Validates ranges and lengths.
    pub fn validate(&self) -> CoreResult<()> {
        check_required("service_name", &self.service_name, MAX_NAME_LEN)?;
        if self.regions.len() < MIN_COMPARE_REGIONS || self.regions.len() > MAX_COMPARE_REGIONS {
            return Err(CoreError::FieldLength {
                field: "regions",
                len: self.regions.len(),
                min: MIN_COMPARE_REGIONS,
                max: MAX_COMPARE_REGIONS,
            });
        }
        if let Some(sku) = &self.sku_name {
            check_len("sku_name", sku, MAX_NAME_LEN)?;
        }
        Ok(())
    }

    /// Region names normalized the way the upstream expects: trimmed and
    /// lowercased.
    #[must_use]
    pub fn normalized_regions(&self) -> Vec<String> {
        self.regions
            .iter()
            .map(|r| r.trim().to_lowercase())
            .collect()
    }
}

/// Parameters for `azure_search_sku_prices`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SkuSearchParams {
    /// Search term matched as a substring of SKU names (e.g. "D2s",
    /// "Standard_", "v3").
    pub search_term: String,
    /// Service family to narrow the search.
    #[serde(default)]
    pub service_family: Option<ServiceFamily>,
    /// Region to narrow the search.
    #[serde(default)]
    pub region: Option<String>,
    /// Include items carrying savings plans (default: true; when false,
    /// plan-eligible items are dropped from the results).
    #[serde(default = "default_true")]
    pub include_savings_plans: bool,
    /// Currency code for pricing (default: USD).
    #[serde(default)]
    pub currency: Currency,
    /// Maximum number of results to return (1-1000).
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Output format: markdown for human-readable, json for
    /// machine-readable.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl SkuSearchParams {
    /// Validates ranges and lengths.
    pub fn validate(&self) -> CoreResult<()> {
        validate_limit(self.limit, 1, MAX_LIMIT)?;
        check_required("search_term", &self.search_term, MAX_NAME_LEN)?;
        if let Some(region) = &self.region {
            check_len("region", region, MAX_REGION_LEN)?;
        }
        Ok(())
    }
}

/// Parameters for `azure_get_service_families`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ServiceFamiliesParams {
    /// Maximum number of unique service families to return (1-500).
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Output format: markdown for human-readable, json for
    /// machine-readable.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl ServiceFamiliesParams {
    /// Validates the family limit.
    pub fn validate(&self) -> CoreResult<()> {
        validate_limit(self.limit, 1, MAX_FAMILY_LIMIT)?;
        Ok(())
    }
}

/// Parameters for `azure_calculate_savings_plan`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SavingsPlanParams {
    /// Azure service name to analyze (e.g. "Virtual Machines").
    pub service_name: String,
    /// Specific SKU to analyze.
    #[serde(default)]
    pub sku_name: Option<String>,
    /// Azure region to analyze.
    #[serde(default)]
    pub region: Option<String>,
    /// Currency code for pricing (default: USD).
    #[serde(default)]
    pub currency: Currency,
    /// Output format: markdown for human-readable, json for
    /// machine-readable.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl SavingsPlanParams {
    /// Validates ranges and lengths.
    pub fn validate(&self) -> CoreResult<()> {
        check_required("service_name", &self.service_name, MAX_NAME_LEN)?;
        if let Some(sku) = &self.sku_name {
            check_len("sku_name", sku, MAX_NAME_LEN)?;
        }
        if let Some(region) = &self.region {
            check_len("region", region, MAX_REGION_LEN)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_prices_defaults() {
        let params: ServicePricesParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.limit, DEFAULT_LIMIT);
        assert_eq!(params.currency, Currency::USD);
        assert_eq!(params.response_format, ResponseFormat::Markdown);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_service_prices_limit_bounds() {
        let params: ServicePricesParams = serde_json::from_str(r#"{"limit": 0}"#).unwrap();
        assert!(params.validate().is_err());
        let params: ServicePricesParams = serde_json::from_str(r#"{"limit": 1001}"#).unwrap();
        assert!(params.validate().is_err());
        let params: ServicePricesParams = serde_json::from_str(r#"{"limit": 1000}"#).unwrap();
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_service_prices_name_length() {
        let long = "x".repeat(101);
        let params: ServicePricesParams =
            serde_json::from_str(&format!(r#"{{"service_name": "{long}"}}"#)).unwrap();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_comparison_region_count() {
        let params: RegionComparisonParams = serde_json::from_str(
            r#"{"service_name": "Virtual Machines", "regions": ["eastus"]}"#,
        )
        .unwrap();
        assert!(params.validate().is_err());

        let params: RegionComparisonParams = serde_json::from_str(
            r#"{"service_name": "Virtual Machines", "regions": ["eastus", "westeurope"]}"#,
        )
        .unwrap();
        assert!(params.validate().is_ok());

        let eleven: Vec<String> = (0..11).map(|i| format!("region{i}")).collect();
        let json = serde_json::json!({
            "service_name": "Virtual Machines",
            "regions": eleven,
        });
        let params: RegionComparisonParams = serde_json::from_value(json).unwrap();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_comparison_defaults_to_consumption() {
        let params: RegionComparisonParams = serde_json::from_str(
            r#"{"service_name": "Storage", "regions": ["eastus", "uksouth"]}"#,
        )
        .unwrap();
        assert_eq!(params.price_type, Some(PriceType::Consumption));
    }

    #[test]
    fn test_regions_normalized() {
        let params: RegionComparisonParams = serde_json::from_str(
            r#"{"service_name": "Storage", "regions": [" EastUS ", "WestEurope"]}"#,
        )
        .unwrap();
        assert_eq!(params.normalized_regions(), vec!["eastus", "westeurope"]);
    }

    #[test]
    fn test_sku_search_requires_term() {
        let params: SkuSearchParams =
            serde_json::from_str(r#"{"search_term": ""}"#).unwrap();
        assert!(params.validate().is_err());

        let params: SkuSearchParams =
            serde_json::from_str(r#"{"search_term": "D2s"}"#).unwrap();
        assert!(params.validate().is_ok());
        assert!(params.include_savings_plans);
    }

    #[test]
    fn test_families_limit_capped_at_500() {
        let params: ServiceFamiliesParams =
            serde_json::from_str(r#"{"limit": 501}"#).unwrap();
        assert!(params.validate().is_err());
        let params: ServiceFamiliesParams =
            serde_json::from_str(r#"{"limit": 500}"#).unwrap();
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_savings_requires_service_name() {
        let params: SavingsPlanParams =
            serde_json::from_str(r#"{"service_name": ""}"#).unwrap();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_enum_wire_values() {
        let params: ServicePricesParams = serde_json::from_str(
            r#"{"service_family": "AI + Machine Learning", "price_type": "Reservation",
                "currency": "EUR", "response_format": "json"}"#,
        )
        .unwrap();
        assert_eq!(params.service_family, Some(ServiceFamily::AiMachineLearning));
        assert_eq!(params.price_type, Some(PriceType::Reservation));
        assert_eq!(params.currency, Currency::EUR);
        assert_eq!(params.response_format, ResponseFormat::Json);
    }
}
