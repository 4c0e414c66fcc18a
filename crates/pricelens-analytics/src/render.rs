//! Price sheet rendering.
//!
//! Markdown output groups items by service name in first-seen order, the
//! way the upstream returns them; JSON output mirrors the upstream
//! envelope (`Items`, `Count`, `BillingCurrency`) with any truncation
//! metadata flattened in.

use chrono::SecondsFormat;

use pricelens_core::format::format_amount;
use pricelens_core::types::{PriceRecord, PriceSheet, ResponseFormat};

use crate::error::AnalyticsResult;

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Renders a sheet in the requested format under the given title.
///
/// The title only appears in markdown output; JSON callers get the raw
/// envelope.
pub fn render_sheet(
    sheet: &PriceSheet,
    format: ResponseFormat,
    title: &str,
) -> AnalyticsResult<String> {
    match format {
        ResponseFormat::Markdown => Ok(render_markdown(sheet, title)),
        ResponseFormat::Json => render_json(sheet),
    }
}

/// Renders the upstream-shaped JSON envelope, pretty-printed.
pub fn render_json(sheet: &PriceSheet) -> AnalyticsResult<String> {
    Ok(serde_json::to_string_pretty(sheet)?)
}

/// Renders grouped markdown.
#[must_use]
pub fn render_markdown(sheet: &PriceSheet, title: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {title}\n\n"));

    if let Some(info) = &sheet.truncation {
        out.push_str(&format!("⚠️ **{}**\n\n", info.truncation_message));
    }

    out.push_str(&format!("**Results**: {} items", sheet.len()));
    if let Some(total) = sheet.undisplayed_total() {
        out.push_str(&format!(" (showing {} of {} total)", sheet.len(), total));
    }
    out.push('\n');

    if sheet.is_empty() {
        out.push_str("No pricing data found for the specified criteria.\n");
        return out;
    }

    for (service, items) in group_by_service(&sheet.items) {
        out.push_str(&format!("\n## {service}\n\n"));
        for item in items {
            render_item(&mut out, item);
        }
    }

    out
}

/// Groups items by service name, preserving first-seen order.
fn group_by_service(items: &[PriceRecord]) -> Vec<(&str, Vec<&PriceRecord>)> {
    let mut groups: Vec<(&str, Vec<&PriceRecord>)> = Vec::new();
    for item in items {
        let service = or_default(&item.service_name, "Unknown Service");
        match groups.iter_mut().find(|(name, _)| *name == service) {
            Some((_, members)) => members.push(item),
            None => groups.push((service, vec![item])),
        }
    }
    groups
}

fn render_item(out: &mut String, item: &PriceRecord) {
    let currency = or_default(&item.currency_code, "USD");
    let unit = or_default(&item.unit_of_measure, "unit");

    out.push_str(&format!(
        "### {}\n",
        or_default(&item.sku_name, "Unknown SKU")
    ));
    out.push_str(&format!(
        "- **Product**: {}\n",
        or_default(&item.product_name, "N/A")
    ));
    out.push_str(&format!(
        "- **Region**: {} ({})\n",
        or_default(&item.location, "N/A"),
        or_default(&item.arm_region_name, "N/A")
    ));
    out.push_str(&format!(
        "- **Price**: {} per {}\n",
        format_amount(item.retail_price, currency),
        unit
    ));
    out.push_str(&format!(
        "- **Type**: {}\n",
        or_default(&item.price_type, "N/A")
    ));

    if let Some(plans) = item.savings_plan.as_ref().filter(|p| !p.is_empty()) {
        out.push_str("- **Savings Plans Available**:\n");
        for plan in plans {
            out.push_str(&format!(
                "  - {}: {} per {}\n",
                or_default(&plan.term, "N/A"),
                format_amount(plan.retail_price, currency),
                unit
            ));
        }
    }

    out.push_str(&format!(
        "- **Meter ID**: `{}`\n",
        or_default(&item.meter_id, "N/A")
    ));
    let effective = item
        .effective_start_date
        .map_or_else(|| "N/A".to_string(), |d| {
            d.to_rfc3339_opts(SecondsFormat::Secs, true)
        });
    out.push_str(&format!("- **Effective Date**: {effective}\n\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricelens_core::types::SavingsPlanRate;

    fn record(service: &str, sku: &str, price: f64) -> PriceRecord {
        PriceRecord {
            currency_code: "USD".to_string(),
            retail_price: price,
            unit_price: price,
            arm_region_name: "eastus".to_string(),
            location: "US East".to_string(),
            product_name: format!("{service} Series"),
            sku_name: sku.to_string(),
            service_name: service.to_string(),
            service_family: "Compute".to_string(),
            unit_of_measure: "1 Hour".to_string(),
            price_type: "Consumption".to_string(),
            meter_id: "meter-1".to_string(),
            ..PriceRecord::default()
        }
    }

    #[test]
    fn test_empty_sheet_notice() {
        let sheet = PriceSheet::from_items(vec![]);
        let md = render_markdown(&sheet, "Azure Service Prices (USD)");
        assert!(md.starts_with("# Azure Service Prices (USD)\n"));
        assert!(md.contains("**Results**: 0 items"));
        assert!(md.contains("No pricing data found"));
    }

    #[test]
    fn test_items_grouped_by_service_in_first_seen_order() {
        let sheet = PriceSheet::from_items(vec![
            record("Virtual Machines", "Standard_D2s_v3", 0.096),
            record("Storage", "P10 Disks", 19.71),
            record("Virtual Machines", "Standard_D4s_v3", 0.192),
        ]);
        let md = render_markdown(&sheet, "Prices");

        let vm = md.find("## Virtual Machines").unwrap();
        let storage = md.find("## Storage").unwrap();
        assert!(vm < storage);

        // Both VM SKUs live under the one VM heading.
        assert_eq!(md.matches("## Virtual Machines").count(), 1);
        assert!(md.contains("### Standard_D2s_v3"));
        assert!(md.contains("### Standard_D4s_v3"));
    }

    #[test]
    fn test_item_fields_rendered() {
        let sheet = PriceSheet::from_items(vec![record("Virtual Machines", "D2", 0.096)]);
        let md = render_markdown(&sheet, "Prices");
        assert!(md.contains("- **Product**: Virtual Machines Series"));
        assert!(md.contains("- **Region**: US East (eastus)"));
        assert!(md.contains("- **Price**: $0.0960 per 1 Hour"));
        assert!(md.contains("- **Type**: Consumption"));
        assert!(md.contains("- **Meter ID**: `meter-1`"));
        assert!(md.contains("- **Effective Date**: N/A"));
    }

    #[test]
    fn test_savings_plans_listed() {
        let mut item = record("Virtual Machines", "D2", 0.096);
        item.savings_plan = Some(vec![
            SavingsPlanRate {
                unit_price: 0.062,
                retail_price: 0.062,
                term: "1 Year".to_string(),
            },
            SavingsPlanRate {
                unit_price: 0.043,
                retail_price: 0.043,
                term: "3 Years".to_string(),
            },
        ]);
        let md = render_markdown(&PriceSheet::from_items(vec![item]), "Prices");
        assert!(md.contains("- **Savings Plans Available**:"));
        assert!(md.contains("  - 1 Year: $0.0620 per 1 Hour"));
        assert!(md.contains("  - 3 Years: $0.0430 per 1 Hour"));
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let sheet = PriceSheet::from_items(vec![PriceRecord::default()]);
        let md = render_markdown(&sheet, "Prices");
        assert!(md.contains("## Unknown Service"));
        assert!(md.contains("### Unknown SKU"));
        assert!(md.contains("- **Price**: $0.0000 per unit"));
    }

    #[test]
    fn test_showing_of_total() {
        let mut sheet = PriceSheet::from_items(vec![record("S", "A", 1.0)]);
        sheet.total_count = Some(500);
        let md = render_markdown(&sheet, "Prices");
        assert!(md.contains("**Results**: 1 items (showing 1 of 500 total)"));
    }

    #[test]
    fn test_truncation_warning_shown() {
        let sheet = PriceSheet::from_items(vec![
            record("S", "A", 1.0),
            record("S", "B", 2.0),
        ])
        .truncated_to(1);
        let md = render_markdown(&sheet, "Prices");
        assert!(md.contains("⚠️ **Response truncated from 2 to 1 items."));
    }

    #[test]
    fn test_json_envelope() {
        let mut sheet = PriceSheet::from_items(vec![record("S", "A", 1.0)]);
        sheet.billing_currency = Some("USD".to_string());
        let json = render_json(&sheet).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Items"][0]["skuName"], "A");
        assert_eq!(value["BillingCurrency"], "USD");
    }

    #[test]
    fn test_effective_date_rfc3339() {
        let mut item = record("S", "A", 1.0);
        item.effective_start_date = Some(
            chrono::DateTime::parse_from_rfc3339("2021-11-01T00:00:00Z")
                .unwrap()
                .with_timezone(&chrono::Utc),
        );
        let md = render_markdown(&PriceSheet::from_items(vec![item]), "Prices");
        assert!(md.contains("- **Effective Date**: 2021-11-01T00:00:00Z"));
    }
}
