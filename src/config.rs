//! Application configuration constants
//!
//! Central location for the fixed business constants and display
//! conventions used throughout the core.

// ===== Pricing =====

/// Tax rate applied to every quote subtotal, in percent.
/// The quote form shows a tax-options selector but only this rate exists.
pub const TAX_RATE_PERCENT: f64 = 10.0;

// ===== Quote Defaults =====

/// Label substituted when a quote is created with a blank name
pub const DEFAULT_QUOTE_NAME: &str = "Untitled Quote";

/// Display format for a quote's scheduled date (en-GB style, e.g. "Mon, 2 Feb 2026")
pub const SCHEDULED_DATE_FORMAT: &str = "%a, %-d %b %Y";

// ===== Client Defaults =====

/// Sentinel stored for contact fields unknown at onboarding time
pub const MISSING_CONTACT_PLACEHOLDER: &str = "N/A";
