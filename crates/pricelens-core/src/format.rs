//! Currency-aware price display.

use crate::types::Currency;

/// Formats a price with its currency symbol, thousands separators, and the
/// currency's display precision.
///
/// Unknown currency codes fall back to using the code itself as the prefix
/// with four decimal places, so records quoted in currencies outside the
/// enumerated set still render.
#[must_use]
pub fn format_amount(amount: f64, currency_code: &str) -> String {
    let (prefix, decimals) = match Currency::from_code(currency_code) {
        Ok(currency) => (currency.symbol().to_string(), currency.decimal_places()),
        Err(_) => (currency_code.to_string(), 4),
    };
    format!("{}{}", prefix, group_thousands(amount, decimals as usize))
}

/// Renders `amount` with `decimals` fractional digits and `,` thousands
/// separators in the integer part.
fn group_thousands(amount: f64, decimals: usize) -> String {
    let formatted = format!("{amount:.decimals$}");
    let (number, fraction) = match formatted.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
