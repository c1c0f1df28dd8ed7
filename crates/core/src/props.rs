//! Property-based tests for rounding and formatting.
//!
//! - Property 1: Rounding to a precision unit
//! - Property 2: Fixed decimal-place rounding
//! - Property 3: Display formatting never loses its shape

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::{PrecisionUnit, RoundingMethod};

use crate::currency::format_currency;
use crate::percent::format_tax_rate;
use crate::rounding::{round, round_to_decimals};

/// Strategy to generate signed amounts (-1,000,000.0000 to 1,000,000.0000).
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate precision units commonly used in settings.
fn precision_unit() -> impl Strategy<Value = PrecisionUnit> {
    prop_oneof![
        Just("0.01"),
        Just("0.05"),
        Just("0.1"),
        Just("0.25"),
        Just("0.5"),
        Just("1"),
        Just("5"),
        Just("10"),
    ]
    .prop_map(|s| s.parse().expect("valid precision unit"))
}

/// Strategy to generate an active rounding method.
fn active_method() -> impl Strategy<Value = RoundingMethod> {
    prop_oneof![
        Just(RoundingMethod::Nearest),
        Just(RoundingMethod::Up),
        Just(RoundingMethod::Down),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Property 1: Rounding to a precision unit
    // =========================================================================

    /// Property 1.1: `NoRounding` is the identity for every unit.
    #[test]
    fn prop_no_rounding_is_identity(value in signed_amount(), unit in precision_unit()) {
        prop_assert_eq!(round(value, RoundingMethod::NoRounding, unit), value);
    }

    /// Property 1.2: Rounded values are whole multiples of the unit.
    #[test]
    fn prop_result_is_multiple_of_unit(
        value in signed_amount(),
        method in active_method(),
        unit in precision_unit(),
    ) {
        let result = round(value, method, unit);
        prop_assert!((result % unit.get()).is_zero(), "{} not a multiple of {}", result, unit);
    }

    /// Property 1.3: Up never decreases, down never increases, nearest stays
    /// within half a unit.
    #[test]
    fn prop_direction_and_distance(value in signed_amount(), unit in precision_unit()) {
        let up = round(value, RoundingMethod::Up, unit);
        let down = round(value, RoundingMethod::Down, unit);
        let nearest = round(value, RoundingMethod::Nearest, unit);

        prop_assert!(up >= value);
        prop_assert!(down <= value);
        prop_assert!(up - down <= unit.get());
        prop_assert!((nearest - value).abs() * Decimal::TWO <= unit.get());
    }

    /// Property 1.4: Rounding an already rounded value changes nothing.
    #[test]
    fn prop_round_is_idempotent(
        value in signed_amount(),
        method in active_method(),
        unit in precision_unit(),
    ) {
        let once = round(value, method, unit);
        prop_assert_eq!(round(once, method, unit), once);
    }

    // =========================================================================
    // Property 2: Fixed decimal-place rounding
    // =========================================================================

    /// Property 2.1: At most two fractional digits, within half a cent.
    #[test]
    fn prop_two_decimals_bounded(value in signed_amount()) {
        let result = round_to_decimals(value, 2);
        prop_assert!(result.normalize().scale() <= 2);
        prop_assert!((result - value).abs() <= Decimal::new(5, 3));
    }

    /// Property 2.2: Idempotence.
    #[test]
    fn prop_two_decimals_idempotent(value in signed_amount()) {
        let once = round_to_decimals(value, 2);
        prop_assert_eq!(round_to_decimals(once, 2), once);
    }

    // =========================================================================
    // Property 3: Display formatting
    // =========================================================================

    /// Property 3.1: Currency strings always carry exactly two fraction digits.
    #[test]
    fn prop_currency_has_two_fraction_digits(value in signed_amount()) {
        let text = format_currency(value, "USD", None);
        let (_, fraction) = text.rsplit_once('.').expect("decimal point present");
        prop_assert_eq!(fraction.len(), 2);
        prop_assert!(fraction.chars().all(|c| c.is_ascii_digit()));
    }

    /// Property 3.2: Tax rates never end in a zero fraction digit or a dot.
    #[test]
    fn prop_tax_rate_is_trimmed(value in signed_amount()) {
        let text = format_tax_rate(value);
        if text.contains('.') {
            prop_assert!(!text.ends_with('0'));
        }
        prop_assert!(!text.ends_with('.'));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn unit(s: &str) -> PrecisionUnit {
        s.parse().unwrap()
    }

    // =========================================================================
    // Property 1: Specific Examples
    // =========================================================================

    /// 10.0 is already on a 0.05 boundary.
    #[test]
    fn test_nearest_on_boundary() {
        assert_eq!(round(dec!(10.0), RoundingMethod::Nearest, unit("0.05")), dec!(10.0));
    }

    /// 10.03 is nearer 10.05 than 10.00.
    #[test]
    fn test_nearest_10_03() {
        assert_eq!(round(dec!(10.03), RoundingMethod::Nearest, unit("0.05")), dec!(10.05));
    }

    /// Down drops 10.03 to 10.00.
    #[test]
    fn test_down_10_03() {
        assert_eq!(round(dec!(10.03), RoundingMethod::Down, unit("0.05")), dec!(10.0));
    }

    /// Up lifts 10.01 to 10.05.
    #[test]
    fn test_up_10_01() {
        assert_eq!(round(dec!(10.01), RoundingMethod::Up, unit("0.05")), dec!(10.05));
    }

    // =========================================================================
    // Property 3: Specific Examples
    // =========================================================================

    #[test]
    fn test_inr_contains_symbol_and_grouping() {
        let text = format_currency(dec!(1234.5), "INR", None);
        assert!(text.contains('₹'));
        assert!(text.contains("1,234.50"));
    }
}
