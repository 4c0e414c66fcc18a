//! Savings-plan ROI arithmetic.
//!
//! Compares pay-as-you-go pricing with the savings-plan rates the upstream
//! reports alongside it, accumulates 1-year and 3-year totals, and picks a
//! term recommendation.

use pricelens_core::format::format_amount;
use pricelens_core::types::{Currency, PriceRecord};

/// Savings for one plan term of one item.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSavings {
    /// Commitment term, e.g. "1 Year".
    pub term: String,
    /// Discounted price under the plan.
    pub plan_price: f64,
    /// Pay-as-you-go price minus the plan price.
    pub amount: f64,
    /// Saving as a percentage of the pay-as-you-go price; zero when that
    /// price is zero.
    pub percent: f64,
}

/// Savings breakdown for one plan-eligible item.
#[derive(Debug, Clone)]
pub struct ItemSavings {
    /// SKU display name.
    pub sku_name: String,
    /// Human-readable region.
    pub location: String,
    /// Product display name.
    pub product_name: String,
    /// Billing unit.
    pub unit: String,
    /// Pay-as-you-go price.
    pub regular_price: f64,
    /// Per-term savings rows.
    pub plans: Vec<PlanSavings>,
}

/// Accumulated totals across all eligible items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavingsSummary {
    /// Pay-as-you-go cost, counted once per eligible item.
    pub total_regular_cost: f64,
    /// Total 1-year plan savings.
    pub one_year_total: f64,
    /// Total 3-year plan savings.
    pub three_year_total: f64,
}

impl SavingsSummary {
    /// 1-year savings as a percentage of the pay-as-you-go total.
    #[must_use]
    pub fn one_year_percent(&self) -> f64 {
        percent_of(self.one_year_total, self.total_regular_cost)
    }

    /// 3-year savings as a percentage of the pay-as-you-go total.
    #[must_use]
    pub fn three_year_percent(&self) -> f64 {
        percent_of(self.three_year_total, self.total_regular_cost)
    }

    /// Term recommendation: 3-year plans once they out-save 1-year plans
    /// by more than half again, otherwise the more flexible 1-year term.
    #[must_use]
    pub fn recommendation(&self) -> &'static str {
        if self.three_year_total > self.one_year_total * 1.5 {
            "Consider 3-year plans for maximum savings if you can commit long-term."
        } else {
            "1-year plans offer good savings with more flexibility."
        }
    }
}

fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// The full analysis: per-item breakdowns plus accumulated totals.
#[derive(Debug, Clone)]
pub struct SavingsAnalysis {
    /// Breakdown per plan-eligible item.
    pub items: Vec<ItemSavings>,
    /// Accumulated totals.
    pub summary: SavingsSummary,
}

impl SavingsAnalysis {
    /// Analyzes the plan-eligible subset of `records`.
    ///
    /// Returns `None` when no record carries a savings plan.
    #[must_use]
    pub fn from_records(records: &[PriceRecord]) -> Option<Self> {
        let mut items = Vec::new();
        let mut summary = SavingsSummary::default();

        for record in records.iter().filter(|r| r.has_savings_plan()) {
            let regular_price = record.retail_price;
            let plans: Vec<PlanSavings> = record
                .savings_plan
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|plan| {
                    let amount = regular_price - plan.retail_price;
                    PlanSavings {
                        term: plan.term.clone(),
                        plan_price: plan.retail_price,
                        amount,
                        percent: percent_of(amount, regular_price),
                    }
                })
                .collect();

            summary.total_regular_cost += regular_price;
            for plan in &plans {
                if plan.term.contains("1 Year") {
                    summary.one_year_total += plan.amount;
                } else if plan.term.contains("3 Year") {
                    summary.three_year_total += plan.amount;
                }
            }

            items.push(ItemSavings {
                sku_name: if record.sku_name.is_empty() {
                    "Unknown SKU".to_string()
                } else {
                    record.sku_name.clone()
                },
                location: if record.location.is_empty() {
                    "Unknown Region".to_string()
                } else {
                    record.location.clone()
                },
                product_name: if record.product_name.is_empty() {
                    "N/A".to_string()
                } else {
                    record.product_name.clone()
                },
                unit: if record.unit_of_measure.is_empty() {
                    "unit".to_string()
                } else {
                    record.unit_of_measure.clone()
                },
                regular_price,
                plans,
            });
        }

        if items.is_empty() {
            None
        } else {
            Some(Self { items, summary })
        }
    }
}

/// Markdown shown when no eligible item was found.
pub const NO_ELIGIBLE_ITEMS_MARKDOWN: &str = "❌ **No savings plan eligible items found** \
    for the specified criteria.\n\nTry searching for different services or regions, \
    or remove specific SKU filters.";

/// Renders the analysis as markdown.
#[must_use]
pub fn render_savings_markdown(
    service_name: &str,
    sku_name: Option<&str>,
    region: Option<&str>,
    currency: Currency,
    analysis: &SavingsAnalysis,
) -> String {
    let code = currency.code();
    let mut out = String::new();
    out.push_str(&format!("# Azure Savings Plan Analysis: {service_name}\n\n"));
    out.push_str(&format!("**Currency**: {code}\n"));
    if let Some(sku) = sku_name {
        out.push_str(&format!("**SKU**: {sku}\n"));
    }
    if let Some(region) = region {
        out.push_str(&format!("**Region**: {region}\n"));
    }
    out.push_str(&format!(
        "**Items with Savings Plans**: {}\n\n",
        analysis.items.len()
    ));

    for item in &analysis.items {
        out.push_str(&format!("## {}\n", item.sku_name));
        out.push_str(&format!("**Region**: {}\n", item.location));
        out.push_str(&format!("**Product**: {}\n\n", item.product_name));
        out.push_str(&format!(
            "**Pay-as-you-go**: {}/{}\n\n",
            format_amount(item.regular_price, code),
            item.unit
        ));

        if !item.plans.is_empty() {
            out.push_str("**Savings Plan Options**:\n\n");
            out.push_str("| Term | Price | Savings | Savings % |\n");
            out.push_str("|------|-------|---------|----------|\n");
            for plan in &item.plans {
                out.push_str(&format!(
                    "| {} | {}/{} | {} | {:.1}% |\n",
                    plan.term,
                    format_amount(plan.plan_price, code),
                    item.unit,
                    format_amount(plan.amount, code),
                    plan.percent
                ));
            }
            out.push('\n');
        }
    }

    let summary = &analysis.summary;
    if summary.total_regular_cost > 0.0 {
        out.push_str("## 💰 Savings Summary\n\n");
        if summary.one_year_total > 0.0 {
            out.push_str(&format!(
                "**1-Year Plans**: Save {} ({:.1}%) compared to pay-as-you-go\n",
                format_amount(summary.one_year_total, code),
                summary.one_year_percent()
            ));
        }
        if summary.three_year_total > 0.0 {
            out.push_str(&format!(
                "**3-Year Plans**: Save {} ({:.1}%) compared to pay-as-you-go\n",
                format_amount(summary.three_year_total, code),
                summary.three_year_percent()
            ));
        }
        out.push_str(&format!(
            "\n**💡 Recommendation**: {}",
            summary.recommendation()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricelens_core::types::SavingsPlanRate;

    fn eligible_record(sku: &str, regular: f64, one_year: f64, three_year: f64) -> PriceRecord {
        PriceRecord {
            currency_code: "USD".to_string(),
            retail_price: regular,
            sku_name: sku.to_string(),
            location: "US East".to_string(),
            product_name: "VM Series".to_string(),
            unit_of_measure: "1 Hour".to_string(),
            savings_plan: Some(vec![
                SavingsPlanRate {
                    unit_price: one_year,
                    retail_price: one_year,
                    term: "1 Year".to_string(),
                },
                SavingsPlanRate {
                    unit_price: three_year,
                    retail_price: three_year,
                    term: "3 Years".to_string(),
                },
            ]),
            ..PriceRecord::default()
        }
    }

    fn plain_record(sku: &str) -> PriceRecord {
        PriceRecord {
            sku_name: sku.to_string(),
            retail_price: 1.0,
            ..PriceRecord::default()
        }
    }

    #[test]
    fn test_no_eligible_items() {
        let records = vec![plain_record("A"), plain_record("B")];
        assert!(SavingsAnalysis::from_records(&records).is_none());
    }

    #[test]
    fn test_filters_to_eligible_items() {
        let records = vec![
            plain_record("A"),
            eligible_record("B", 0.10, 0.07, 0.05),
        ];
        let analysis = SavingsAnalysis::from_records(&records).unwrap();
        assert_eq!(analysis.items.len(), 1);
        assert_eq!(analysis.items[0].sku_name, "B");
    }

    #[test]
    fn test_per_plan_percentages() {
        let records = vec![eligible_record("B", 0.10, 0.07, 0.05)];
        let analysis = SavingsAnalysis::from_records(&records).unwrap();
        let plans = &analysis.items[0].plans;
        assert!((plans[0].amount - 0.03).abs() < 1e-12);
        assert!((plans[0].percent - 30.0).abs() < 1e-9);
        assert!((plans[1].amount - 0.05).abs() < 1e-12);
        assert!((plans[1].percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_regular_price_guard() {
        let records = vec![eligible_record("B", 0.0, 0.0, 0.0)];
        let analysis = SavingsAnalysis::from_records(&records).unwrap();
        assert_eq!(analysis.items[0].plans[0].percent, 0.0);
        assert_eq!(analysis.summary.one_year_percent(), 0.0);
    }

    #[test]
    fn test_regular_cost_counted_once_per_item() {
        // One item with both terms: pay-as-you-go total is the item price,
        // not doubled.
        let records = vec![eligible_record("B", 0.10, 0.07, 0.05)];
        let analysis = SavingsAnalysis::from_records(&records).unwrap();
        assert!((analysis.summary.total_regular_cost - 0.10).abs() < 1e-12);
        assert!((analysis.summary.one_year_total - 0.03).abs() < 1e-12);
        assert!((analysis.summary.three_year_total - 0.05).abs() < 1e-12);
        assert!((analysis.summary.one_year_percent() - 30.0).abs() < 1e-9);
        assert!((analysis.summary.three_year_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_totals_accumulate_across_items() {
        let records = vec![
            eligible_record("B", 0.10, 0.07, 0.05),
            eligible_record("C", 0.20, 0.16, 0.10),
        ];
        let analysis = SavingsAnalysis::from_records(&records).unwrap();
        assert!((analysis.summary.total_regular_cost - 0.30).abs() < 1e-12);
        assert!((analysis.summary.one_year_total - 0.07).abs() < 1e-12);
        assert!((analysis.summary.three_year_total - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_recommendation_threshold() {
        // 3y = 0.05 > 1.5 * 1y = 0.045 -> long-term recommendation.
        let three_year_wins = SavingsSummary {
            total_regular_cost: 1.0,
            one_year_total: 0.03,
            three_year_total: 0.05,
        };
        assert!(three_year_wins.recommendation().contains("3-year"));

        // 3y = 0.04 <= 1.5 * 1y = 0.045 -> flexibility recommendation.
        let one_year_wins = SavingsSummary {
            total_regular_cost: 1.0,
            one_year_total: 0.03,
            three_year_total: 0.04,
        };
        assert!(one_year_wins.recommendation().contains("1-year"));
    }

    #[test]
    fn test_markdown_rendering() {
        let records = vec![eligible_record("Standard_D2s_v3", 0.10, 0.07, 0.05)];
        let analysis = SavingsAnalysis::from_records(&records).unwrap();
        let md = render_savings_markdown(
            "Virtual Machines",
            Some("Standard_D2s_v3"),
            Some("eastus"),
            Currency::USD,
            &analysis,
        );
        assert!(md.contains("# Azure Savings Plan Analysis: Virtual Machines"));
        assert!(md.contains("**Items with Savings Plans**: 1"));
        assert!(md.contains("**Pay-as-you-go**: $0.1000/1 Hour"));
        assert!(md.contains("| Term | Price | Savings | Savings % |"));
        assert!(md.contains("| 1 Year | $0.0700/1 Hour | $0.0300 | 30.0% |"));
        assert!(md.contains("| 3 Years | $0.0500/1 Hour | $0.0500 | 50.0% |"));
        assert!(md.contains("## 💰 Savings Summary"));
        assert!(md.contains("**💡 Recommendation**:"));
    }

    #[test]
    fn test_negative_savings_still_render() {
        // A plan priced above pay-as-you-go yields a negative row, not a
        // panic or a filtered item.
        let mut record = eligible_record("B", 0.10, 0.12, 0.05);
        record.savings_plan.as_mut().unwrap().truncate(1);
        let analysis = SavingsAnalysis::from_records(&[record]).unwrap();
        assert!((analysis.items[0].plans[0].amount + 0.02).abs() < 1e-12);
        assert!(analysis.items[0].plans[0].percent < 0.0);
    }
}
