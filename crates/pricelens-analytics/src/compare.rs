//! Cross-region price comparison.
//!
//! Takes per-region item lists (fetched independently upstream), regroups
//! them per SKU, and computes deltas against the cheapest region.

use pricelens_core::format::format_amount;
use pricelens_core::types::{Currency, PriceRecord};

/// One region's price for a SKU.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionPrice {
    /// ARM region name the caller asked for.
    pub region: String,
    /// Retail price in that region.
    pub price: f64,
    /// Human-readable location.
    pub location: String,
    /// Billing unit.
    pub unit: String,
    /// Product display name.
    pub product: String,
}

/// Per-SKU comparison across regions, sorted ascending by price.
#[derive(Debug, Clone)]
pub struct SkuComparison {
    /// SKU display name.
    pub sku_name: String,
    /// Regional prices, cheapest first.
    pub prices: Vec<RegionPrice>,
}

impl SkuComparison {
    /// The cheapest regional price.
    #[must_use]
    pub fn cheapest(&self) -> Option<&RegionPrice> {
        self.prices.first()
    }

    /// The most expensive regional price.
    #[must_use]
    pub fn most_expensive(&self) -> Option<&RegionPrice> {
        self.prices.last()
    }

    /// Absolute and percentage saving from choosing the cheapest region
    /// over the most expensive. Percentage is relative to the most
    /// expensive price, and zero when that price is zero.
    ///
    /// `None` unless at least two regions priced the SKU.
    #[must_use]
    pub fn max_savings(&self) -> Option<(f64, f64)> {
        if self.prices.len() < 2 {
            return None;
        }
        let cheapest = self.cheapest()?.price;
        let most_expensive = self.most_expensive()?.price;
        let amount = most_expensive - cheapest;
        let percent = if most_expensive > 0.0 {
            amount / most_expensive * 100.0
        } else {
            0.0
        };
        Some((amount, percent))
    }
}

/// Regroups per-region fetch results into per-SKU comparisons.
///
/// SKUs appear in first-seen order across the region lists; within a SKU,
/// a region that reported the SKU more than once keeps the last report.
#[must_use]
pub fn compare_regions(region_items: &[(String, Vec<PriceRecord>)]) -> Vec<SkuComparison> {
    let mut comparisons: Vec<SkuComparison> = Vec::new();

    for (region, items) in region_items {
        for item in items {
            let sku = if item.sku_name.is_empty() {
                "Unknown SKU"
            } else {
                &item.sku_name
            };
            let entry = RegionPrice {
                region: region.clone(),
                price: item.retail_price,
                location: if item.location.is_empty() {
                    region.clone()
                } else {
                    item.location.clone()
                },
                unit: if item.unit_of_measure.is_empty() {
                    "unit".to_string()
                } else {
                    item.unit_of_measure.clone()
                },
                product: if item.product_name.is_empty() {
                    "Unknown Product".to_string()
                } else {
                    item.product_name.clone()
                },
            };

            let comparison = match comparisons.iter_mut().find(|c| c.sku_name == sku) {
                Some(existing) => existing,
                None => {
                    comparisons.push(SkuComparison {
                        sku_name: sku.to_string(),
                        prices: Vec::new(),
                    });
                    comparisons.last_mut().expect("just pushed")
                }
            };
            match comparison.prices.iter_mut().find(|p| p.region == *region) {
                Some(existing) => *existing = entry,
                None => comparison.prices.push(entry),
            }
        }
    }

    for comparison in &mut comparisons {
        comparison
            .prices
            .sort_by(|a, b| a.price.total_cmp(&b.price));
    }
    comparisons
}

/// Renders the comparison as markdown with one table per SKU.
#[must_use]
pub fn render_comparison_markdown(
    service_name: &str,
    sku_name: Option<&str>,
    price_type_label: &str,
    currency: Currency,
    comparisons: &[SkuComparison],
) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Azure Price Comparison: {service_name}\n\n"));
    out.push_str(&format!("**Currency**: {}\n", currency.code()));
    out.push_str(&format!("**Price Type**: {price_type_label}\n"));
    if let Some(sku) = sku_name {
        out.push_str(&format!("**SKU**: {sku}\n"));
    }
    out.push('\n');

    if comparisons.is_empty() {
        out.push_str("❌ No pricing data found for the specified criteria.\n");
        return out;
    }

    for comparison in comparisons {
        out.push_str(&format!("## {}\n\n", comparison.sku_name));

        let Some(cheapest) = comparison.cheapest() else {
            continue;
        };
        let cheapest_price = cheapest.price;
        let cheapest_region = cheapest.region.clone();

        out.push_str("| Region | Location | Price | Difference from Cheapest |\n");
        out.push_str("|--------|----------|-------|-------------------------|\n");

        for entry in &comparison.prices {
            let price_str = format_amount(entry.price, currency.code());
            let diff = if entry.price == cheapest_price {
                "**CHEAPEST** 🏆".to_string()
            } else {
                let amount = entry.price - cheapest_price;
                let percent = if cheapest_price > 0.0 {
                    amount / cheapest_price * 100.0
                } else {
                    0.0
                };
                format!(
                    "+{} (+{:.1}%)",
                    format_amount(amount, currency.code()),
                    percent
                )
            };
            out.push_str(&format!(
                "| {} | {} | {}/{} | {} |\n",
                entry.region, entry.location, price_str, entry.unit, diff
            ));
        }

        if let Some((amount, percent)) = comparison.max_savings() {
            let most_expensive_region = comparison
                .most_expensive()
                .map_or_else(String::new, |p| p.region.clone());
            out.push_str(&format!(
                "\n💰 **Maximum Savings**: {} ({:.1}%) by choosing {} over {}\n\n",
                format_amount(amount, currency.code()),
                percent,
                cheapest_region,
                most_expensive_region
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sku: &str, price: f64, location: &str) -> PriceRecord {
        PriceRecord {
            currency_code: "USD".to_string(),
            retail_price: price,
            sku_name: sku.to_string(),
            location: location.to_string(),
            unit_of_measure: "1 Hour".to_string(),
            product_name: "VM Series".to_string(),
            ..PriceRecord::default()
        }
    }

    fn region_data() -> Vec<(String, Vec<PriceRecord>)> {
        vec![
            (
                "eastus".to_string(),
                vec![record("Standard_D2s_v3", 0.096, "US East")],
            ),
            (
                "westeurope".to_string(),
                vec![record("Standard_D2s_v3", 0.1104, "EU West")],
            ),
            (
                "uksouth".to_string(),
                vec![record("Standard_D2s_v3", 0.1152, "UK South")],
            ),
        ]
    }

    #[test]
    fn test_prices_sorted_ascending() {
        let comparisons = compare_regions(&region_data());
        assert_eq!(comparisons.len(), 1);
        let prices = &comparisons[0].prices;
        assert_eq!(prices[0].region, "eastus");
        assert_eq!(prices[2].region, "uksouth");
    }

    #[test]
    fn test_cheapest_and_most_expensive() {
        let comparisons = compare_regions(&region_data());
        let c = &comparisons[0];
        assert_eq!(c.cheapest().unwrap().region, "eastus");
        assert_eq!(c.most_expensive().unwrap().region, "uksouth");
    }

    #[test]
    fn test_max_savings_percentage_relative_to_most_expensive() {
        let comparisons = compare_regions(&region_data());
        let (amount, percent) = comparisons[0].max_savings().unwrap();
        assert!((amount - 0.0192).abs() < 1e-9);
        assert!((percent - (0.0192 / 0.1152 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn test_single_region_has_no_savings() {
        let data = vec![(
            "eastus".to_string(),
            vec![record("Standard_D2s_v3", 0.096, "US East")],
        )];
        let comparisons = compare_regions(&data);
        assert!(comparisons[0].max_savings().is_none());
    }

    #[test]
    fn test_zero_price_guard() {
        let data = vec![
            ("a".to_string(), vec![record("X", 0.0, "A")]),
            ("b".to_string(), vec![record("X", 0.0, "B")]),
        ];
        let comparisons = compare_regions(&data);
        let (amount, percent) = comparisons[0].max_savings().unwrap();
        assert_eq!(amount, 0.0);
        assert_eq!(percent, 0.0);
    }

    #[test]
    fn test_duplicate_region_report_keeps_last() {
        let data = vec![(
            "eastus".to_string(),
            vec![
                record("X", 1.0, "US East"),
                record("X", 2.0, "US East"),
            ],
        )];
        let comparisons = compare_regions(&data);
        assert_eq!(comparisons[0].prices.len(), 1);
        assert_eq!(comparisons[0].prices[0].price, 2.0);
    }

    #[test]
    fn test_markdown_table_and_summary() {
        let comparisons = compare_regions(&region_data());
        let md = render_comparison_markdown(
            "Virtual Machines",
            Some("Standard_D2s_v3"),
            "Consumption",
            Currency::USD,
            &comparisons,
        );
        assert!(md.contains("# Azure Price Comparison: Virtual Machines"));
        assert!(md.contains("**Currency**: USD"));
        assert!(md.contains("**Price Type**: Consumption"));
        assert!(md.contains("**SKU**: Standard_D2s_v3"));
        assert!(md.contains("| Region | Location | Price | Difference from Cheapest |"));
        assert!(md.contains("| eastus | US East | $0.0960/1 Hour | **CHEAPEST** 🏆 |"));
        assert!(md.contains("+$0.0144 (+15.0%)"));
        assert!(md.contains("by choosing eastus over uksouth"));
    }

    #[test]
    fn test_markdown_empty_comparison() {
        let md = render_comparison_markdown(
            "Virtual Machines",
            None,
            "All",
            Currency::USD,
            &[],
        );
        assert!(md.contains("❌ No pricing data found"));
    }

    #[test]
    fn test_sku_groups_span_regions() {
        let data = vec![
            (
                "eastus".to_string(),
                vec![record("A", 1.0, "US East"), record("B", 5.0, "US East")],
            ),
            (
                "westus2".to_string(),
                vec![record("B", 4.0, "US West 2")],
            ),
        ];
        let comparisons = compare_regions(&data);
        assert_eq!(comparisons.len(), 2);
        let b = comparisons.iter().find(|c| c.sku_name == "B").unwrap();
        assert_eq!(b.prices.len(), 2);
        assert_eq!(b.cheapest().unwrap().region, "westus2");
    }
}
