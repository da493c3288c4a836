//! Pricing module for quote totals
//!
//! Pure computations over the quote form's numeric inputs: tax, grand
//! total, raw-entry parsing and two-decimal display formatting.

use serde::{Deserialize, Serialize};

/// Computed totals for a quote subtotal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
}

/// Compute tax and grand total for a subtotal at the given tax rate.
///
/// A negative or non-finite subtotal is coerced to 0 before computing,
/// matching the quote form's fallback on unparsable entry.
pub fn quote_totals(subtotal: f64, tax_rate_percent: f64) -> QuoteTotals {
    let subtotal = if subtotal.is_finite() {
        subtotal.max(0.0)
    } else {
        0.0
    };

    let tax_amount = (subtotal * tax_rate_percent) / 100.0;

    QuoteTotals {
        subtotal,
        tax_amount,
        grand_total: subtotal + tax_amount,
    }
}

/// Parse a raw subtotal entry, falling back to 0 on anything unparsable
pub fn parse_subtotal(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Render a monetary value with two-decimal display precision
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}
