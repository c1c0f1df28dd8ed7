//! Percentage and tax-rate display.

use rust_decimal::Decimal;

use crate::rounding::round_to_decimals;

/// Decimal places shown for tax rates.
pub const TAX_RATE_DECIMALS: u32 = 2;

/// Formats a percentage with at most `decimals` fractional digits.
///
/// Trailing zeros and a dangling decimal point are dropped, so whole
/// numbers never show a decimal point. No `%` sign is added.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::percent::format_percentage;
///
/// assert_eq!(format_percentage(dec!(12.50), 2), "12.5");
/// assert_eq!(format_percentage(dec!(33.3333), 1), "33.3");
/// ```
#[must_use]
pub fn format_percentage(value: Decimal, decimals: u32) -> String {
    round_to_decimals(value, decimals).normalize().to_string()
}

/// Formats a tax rate (two decimals, trailing zeros trimmed).
#[must_use]
pub fn format_tax_rate(rate: Decimal) -> String {
    format_percentage(rate, TAX_RATE_DECIMALS)
}
