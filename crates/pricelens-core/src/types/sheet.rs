//! Merged multi-page price results.

use serde::Serialize;

use super::record::PriceRecord;

/// Truncation metadata attached to an oversized response.
///
/// The field set mirrors the keys emitted in JSON output, so the rendered
/// envelope carries `truncated`, counts, and the advisory message inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Truncation {
    /// Always true; present only on truncated responses.
    pub truncated: bool,
    /// Item count before truncation.
    pub original_count: usize,
    /// Item count after truncation.
    pub truncated_count: usize,
    /// Advisory text explaining how to see the remainder.
    pub truncation_message: String,
}

impl Truncation {
    /// Builds truncation metadata for a cut from `original_count` items
    /// down to `truncated_count`.
    #[must_use]
    pub fn new(original_count: usize, truncated_count: usize) -> Self {
        let truncation_message = format!(
            "Response truncated from {original_count} to {truncated_count} items. \
             Use pagination parameters or add more specific filters to see additional results."
        );
        Self {
            truncated: true,
            original_count,
            truncated_count,
            truncation_message,
        }
    }
}

/// The merged result of one or more upstream pages.
///
/// Items from continuation pages are concatenated in upstream order; the
/// upstream `Count` values are summed when reported.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PriceSheet {
    /// Merged price items.
    #[serde(rename = "Items")]
    pub items: Vec<PriceRecord>,
    /// Total item count reported by the upstream, when present.
    #[serde(rename = "Count", skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    /// Billing currency reported by the upstream.
    #[serde(rename = "BillingCurrency", skip_serializing_if = "Option::is_none")]
    pub billing_currency: Option<String>,
    /// Truncation metadata, set only when the response was cut to size.
    /// Flattened into the envelope; absent entirely when `None`.
    #[serde(flatten)]
    pub truncation: Option<Truncation>,
}

impl PriceSheet {
    /// Creates a sheet from merged items with no upstream metadata.
    #[must_use]
    pub fn from_items(items: Vec<PriceRecord>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Number of items in the sheet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the sheet holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The upstream total, when it exceeds the number of items returned.
    #[must_use]
    pub fn undisplayed_total(&self) -> Option<u64> {
        self.total_count.filter(|&total| total > self.items.len() as u64)
    }

    /// A copy of this sheet keeping only the first `n` items, tagged with
    /// truncation metadata recording the original size.
    #[must_use]
    pub fn truncated_to(&self, n: usize) -> Self {
        let mut cut = self.clone();
        cut.items.truncate(n);
        cut.truncation = Some(Truncation::new(self.items.len(), cut.items.len()));
        cut
    }
}
