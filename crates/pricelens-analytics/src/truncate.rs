//! Size-bounded response shaping.
//!
//! Responses are capped at [`CHARACTER_LIMIT`] characters. An oversized
//! sheet is cut to the largest item prefix whose rendering fits, found by
//! binary search over the prefix length; the cut sheet carries truncation
//! metadata so the caller knows what was dropped. At least one item is
//! always kept.

use pricelens_core::limits::CHARACTER_LIMIT;
use pricelens_core::types::{PriceSheet, ResponseFormat};

use crate::error::AnalyticsResult;
use crate::render::render_sheet;

/// Renders a sheet in the requested format, truncating to the character
/// budget when necessary.
pub fn shape_response(
    sheet: &PriceSheet,
    format: ResponseFormat,
    title: &str,
) -> AnalyticsResult<String> {
    shape_response_with_limit(sheet, format, title, CHARACTER_LIMIT)
}

/// [`shape_response`] with an explicit character budget.
pub fn shape_response_with_limit(
    sheet: &PriceSheet,
    format: ResponseFormat,
    title: &str,
    char_limit: usize,
) -> AnalyticsResult<String> {
    let rendered = render_sheet(sheet, format, title)?;
    if rendered.chars().count() <= char_limit || sheet.is_empty() {
        return Ok(rendered);
    }

    let mut low = 1usize;
    let mut high = sheet.len();
    let mut best = 1usize;
    while low <= high {
        let mid = low + (high - low) / 2;
        let candidate = render_sheet(&sheet.truncated_to(mid), format, title)?;
        if candidate.chars().count() <= char_limit {
            best = mid;
            low = mid + 1;
        } else {
            if mid == 1 {
                break;
            }
            high = mid - 1;
        }
    }

    render_sheet(&sheet.truncated_to(best), format, title)
}
