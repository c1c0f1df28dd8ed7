//! Locale-aware monetary formatting.

use rust_decimal::Decimal;
use tally_shared::types::{CurrencyCatalog, CurrencyDescriptor};

use super::locale::{LocaleConventions, NBSP, SymbolPosition};
use crate::rounding::{MONEY_DECIMALS, round_money};

/// Formats `amount` in the built-in catalog's currency `code`.
///
/// Unknown codes fall back to the catalog default (INR). `locale`
/// overrides the descriptor's own locale when given.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::currency::format_currency;
///
/// assert_eq!(format_currency(dec!(1234.5), "INR", None), "₹1,234.50");
/// assert_eq!(format_currency(dec!(1234567), "INR", None), "₹12,34,567.00");
/// ```
#[must_use]
pub fn format_currency(amount: Decimal, code: &str, locale: Option<&str>) -> String {
    format_currency_in(&CurrencyCatalog::builtin(), amount, code, locale)
}

/// Formats `amount` using a descriptor looked up in `catalog`.
#[must_use]
pub fn format_currency_in(
    catalog: &CurrencyCatalog,
    amount: Decimal,
    code: &str,
    locale: Option<&str>,
) -> String {
    let descriptor = catalog.resolve(code);
    format_money(amount, descriptor, locale.unwrap_or(descriptor.locale.as_str()))
}

/// Formats `amount` with `descriptor`'s symbol in `locale`'s conventions.
///
/// Alphabetic prefix symbols (`AED`, `CHF`) are separated from the digits
/// by a no-break space.
#[must_use]
pub fn format_money(amount: Decimal, descriptor: &CurrencyDescriptor, locale: &str) -> String {
    let conventions = LocaleConventions::for_locale(locale);
    let (negative, body) = render_digits(amount, &conventions);
    let sign = if negative { "-" } else { "" };
    let symbol = descriptor.symbol.as_str();

    match conventions.symbol_position {
        SymbolPosition::Prefix => {
            let spacing = if symbol.chars().last().is_some_and(char::is_alphabetic) {
                NBSP
            } else {
                conventions.symbol_spacing
            };
            format!("{sign}{symbol}{spacing}{body}")
        }
        SymbolPosition::Suffix => {
            let spacing = conventions.symbol_spacing;
            format!("{sign}{body}{spacing}{symbol}")
        }
    }
}

/// Formats `amount` with two decimals and locale grouping, without a symbol.
#[must_use]
pub fn format_number(amount: Decimal, locale: &str) -> String {
    let conventions = LocaleConventions::for_locale(locale);
    let (negative, body) = render_digits(amount, &conventions);
    if negative { format!("-{body}") } else { body }
}

/// Rounds to money precision and renders the unsigned digits.
///
/// Returns whether the rounded amount is below zero; amounts that round to
/// zero are never reported as negative.
fn render_digits(amount: Decimal, conventions: &LocaleConventions) -> (bool, String) {
    let rounded = round_money(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let magnitude = rounded.abs();
    let whole = magnitude.trunc().mantissa().unsigned_abs();
    let cents = (magnitude.fract() * Decimal::ONE_HUNDRED)
        .trunc()
        .mantissa()
        .unsigned_abs();

    let body = format!(
        "{}{}{cents:0width$}",
        conventions.group_digits(whole),
        conventions.decimal_separator(),
        width = MONEY_DECIMALS as usize
    );
    (negative, body)
}
