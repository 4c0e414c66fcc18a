//! Service-family discovery.
//!
//! The upstream API has no endpoint listing families, so discovery works
//! from an unfiltered sample: group what came back by `serviceFamily` and
//! summarize each group.

use std::collections::BTreeSet;

use serde::Serialize;

use pricelens_core::format::format_amount;
use pricelens_core::types::PriceRecord;

use crate::error::AnalyticsResult;

/// An example SKU shown for a family.
#[derive(Debug, Clone, Serialize)]
pub struct FamilyExample {
    /// SKU display name.
    pub sku: String,
    /// Owning service.
    pub service: String,
    /// Observed retail price.
    pub price: f64,
    /// Billing currency of the observed price.
    pub currency: String,
    /// Billing unit.
    pub unit: String,
}

/// Observed positive price range within a family.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PriceRange {
    /// Smallest positive price seen.
    pub min: f64,
    /// Largest price seen.
    pub max: f64,
}

/// Summary of one service family from the sampled data.
#[derive(Debug, Clone, Serialize)]
pub struct FamilyInfo {
    /// Family name as reported upstream.
    pub name: String,
    /// Sorted unique service names in the family.
    pub services: BTreeSet<String>,
    /// Up to three example SKUs with positive prices.
    pub example_skus: Vec<FamilyExample>,
    /// Observed price range; `None` when no positive price was sampled.
    pub price_range: Option<PriceRange>,
}

/// Maximum example SKUs kept per family.
const MAX_EXAMPLES: usize = 3;

/// Groups sampled items by service family, sorted by family name.
#[must_use]
pub fn discover_families(items: &[PriceRecord]) -> Vec<FamilyInfo> {
    let mut families: Vec<FamilyInfo> = Vec::new();

    for item in items {
        let name = if item.service_family.is_empty() {
            "Other"
        } else {
            &item.service_family
        };
        let service = if item.service_name.is_empty() {
            "Unknown Service"
        } else {
            &item.service_name
        };

        let family = match families.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing,
            None => {
                families.push(FamilyInfo {
                    name: name.to_string(),
                    services: BTreeSet::new(),
                    example_skus: Vec::new(),
                    price_range: None,
                });
                families.last_mut().expect("just pushed")
            }
        };

        family.services.insert(service.to_string());

        let price = item.retail_price;
        if price > 0.0 {
            family.price_range = Some(match family.price_range {
                Some(range) => PriceRange {
                    min: range.min.min(price),
                    max: range.max.max(price),
                },
                None => PriceRange {
                    min: price,
                    max: price,
                },
            });

            if family.example_skus.len() < MAX_EXAMPLES {
                family.example_skus.push(FamilyExample {
                    sku: if item.sku_name.is_empty() {
                        "Unknown".to_string()
                    } else {
                        item.sku_name.clone()
                    },
                    service: service.to_string(),
                    price,
                    currency: if item.currency_code.is_empty() {
                        "USD".to_string()
                    } else {
                        item.currency_code.clone()
                    },
                    unit: if item.unit_of_measure.is_empty() {
                        "unit".to_string()
                    } else {
                        item.unit_of_measure.clone()
                    },
                });
            }
        }
    }

    families.sort_by(|a, b| a.name.cmp(&b.name));
    families
}

/// Renders up to `limit` families as markdown.
#[must_use]
pub fn render_families_markdown(families: &[FamilyInfo], limit: usize) -> String {
    let mut out = String::new();
    out.push_str("# Azure Service Families\n\n");
    out.push_str(&format!("**Total Families Found**: {}\n\n", families.len()));

    for family in families.iter().take(limit) {
        out.push_str(&format!("## {}\n\n", family.name));

        out.push_str(&format!("**Services** ({}):\n", family.services.len()));
        for service in &family.services {
            out.push_str(&format!("- {service}\n"));
        }
        out.push('\n');

        if !family.example_skus.is_empty() {
            out.push_str("**Example SKUs**:\n");
            for example in &family.example_skus {
                out.push_str(&format!(
                    "- **{}** ({}): {}/{}\n",
                    example.sku,
                    example.service,
                    format_amount(example.price, &example.currency),
                    example.unit
                ));
            }
            out.push('\n');
        }

        if let Some(range) = family.price_range {
            out.push_str(&format!(
                "**Price Range**: {} - {}\n\n",
                format_amount(range.min, "USD"),
                format_amount(range.max, "USD")
            ));
        }
    }

    out
}

/// Renders up to `limit` families as a JSON object keyed by family name.
pub fn render_families_json(families: &[FamilyInfo], limit: usize) -> AnalyticsResult<String> {
    let mut map = serde_json::Map::new();
    for family in families.iter().take(limit) {
        map.insert(
            family.name.clone(),
            serde_json::json!({
                "services": family.services,
                "example_skus": family.example_skus,
                "price_range": family.price_range,
            }),
        );
    }
    Ok(serde_json::to_string_pretty(&serde_json::Value::Object(
        map,
    ))?)
}
