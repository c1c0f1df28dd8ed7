//! Decimal rounding to a configured increment.
//!
//! Two flavours are used by document screens:
//! - [`round`] snaps totals to the settings' precision unit (0.05, 1, ...)
//!   using the settings' method.
//! - [`round_to_decimals`] is the fixed decimal-place rounding applied to
//!   every amount before it is displayed.
//!
//! Both round midpoints away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tally_shared::TallyResult;
use tally_shared::types::{PrecisionUnit, RoundingMethod, SystemSettings};

/// Decimal places used for money.
pub const MONEY_DECIMALS: u32 = 2;

/// Rounds `value` to a multiple of `unit` using `method`.
///
/// `NoRounding` returns the value untouched. Otherwise the value is
/// expressed in units, rounded to a whole number of units and scaled back.
/// If that arithmetic leaves the decimal range the value is returned
/// unchanged.
#[must_use]
pub fn round(value: Decimal, method: RoundingMethod, unit: PrecisionUnit) -> Decimal {
    let strategy = match method {
        RoundingMethod::NoRounding => return value,
        RoundingMethod::Nearest => RoundingStrategy::MidpointAwayFromZero,
        RoundingMethod::Up => RoundingStrategy::ToPositiveInfinity,
        RoundingMethod::Down => RoundingStrategy::ToNegativeInfinity,
    };
    let unit = unit.get();

    value
        .checked_div(unit)
        .map(|steps| steps.round_dp_with_strategy(0, strategy))
        .and_then(|steps| steps.checked_mul(unit))
        .unwrap_or_else(|| {
            tracing::warn!(%value, %unit, %method, "Rounding overflowed, value left unrounded");
            value
        })
}

/// Rounds `value` to `decimals` places, midpoint away from zero.
#[must_use]
pub fn round_to_decimals(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds `value` to [`MONEY_DECIMALS`] places.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    round_to_decimals(value, MONEY_DECIMALS)
}

/// A rounding method bound to its precision unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundingConfig {
    /// How values are snapped.
    pub method: RoundingMethod,
    /// The increment values snap to.
    pub unit: PrecisionUnit,
}

/// Result of rounding a document total, with the round-off line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundingAdjustment {
    /// Total before rounding.
    pub original: Decimal,
    /// Total after rounding.
    pub rounded: Decimal,
    /// `rounded - original`; positive when rounding added to the total.
    pub adjustment: Decimal,
}

impl RoundingConfig {
    /// Creates a rounding config.
    #[must_use]
    pub const fn new(method: RoundingMethod, unit: PrecisionUnit) -> Self {
        Self { method, unit }
    }

    /// Config that leaves every value unchanged.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(RoundingMethod::NoRounding, PrecisionUnit::CENT)
    }

    /// Reads the rounding method and precision out of system settings.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the precision is not a positive decimal.
    pub fn from_settings(settings: &SystemSettings) -> TallyResult<Self> {
        Ok(Self::new(settings.rounding_method(), settings.precision_unit()?))
    }

    /// Applies this config to `value`.
    #[must_use]
    pub fn apply(&self, value: Decimal) -> Decimal {
        round(value, self.method, self.unit)
    }

    /// Rounds `value` and reports the difference.
    #[must_use]
    pub fn adjust(&self, value: Decimal) -> RoundingAdjustment {
        let rounded = self.apply(value);
        RoundingAdjustment {
            original: value,
            rounded,
            adjustment: rounded - value,
        }
    }
}
