//! Rounding policy types read from system settings.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{TallyError, TallyResult};

/// How a value is snapped to the configured precision unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMethod {
    /// Leave values untouched.
    #[default]
    NoRounding,
    /// Nearest increment, ties away from zero.
    Nearest,
    /// Next increment towards positive infinity.
    Up,
    /// Next increment towards negative infinity.
    Down,
}

impl RoundingMethod {
    /// Parses a settings value, treating anything unrecognized as `NoRounding`.
    ///
    /// Settings arrive as free-form strings; an unknown method must not
    /// break document rendering, so it disables rounding and logs a warning.
    #[must_use]
    pub fn from_setting(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(method = %value, "Unknown rounding method, rounding disabled");
            Self::NoRounding
        })
    }

    /// The settings spelling of this method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoRounding => "no_rounding",
            Self::Nearest => "nearest",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl std::fmt::Display for RoundingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingMethod {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "no_rounding" | "none" => Ok(Self::NoRounding),
            "nearest" => Ok(Self::Nearest),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(TallyError::Validation(format!(
                "unknown rounding method: {s}"
            ))),
        }
    }
}

/// Smallest increment a rounded value may take. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct PrecisionUnit(Decimal);

impl PrecisionUnit {
    /// One hundredth, the usual unit for money.
    pub const CENT: Self = Self(Decimal::from_parts(1, 0, 0, false, 2));

    /// Creates a precision unit.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Validation` if `unit` is zero or negative.
    pub fn new(unit: Decimal) -> TallyResult<Self> {
        if unit <= Decimal::ZERO {
            return Err(TallyError::Validation(format!(
                "rounding precision must be greater than zero, got {unit}"
            )));
        }
        Ok(Self(unit.normalize()))
    }

    /// Returns the unit as a decimal.
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }
}

impl Default for PrecisionUnit {
    fn default() -> Self {
        Self::CENT
    }
}

impl std::fmt::Display for PrecisionUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PrecisionUnit {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let unit = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| TallyError::Validation(format!("invalid rounding precision: {s}")))?;
        Self::new(unit)
    }
}

impl TryFrom<Decimal> for PrecisionUnit {
    type Error = TallyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PrecisionUnit> for Decimal {
    fn from(unit: PrecisionUnit) -> Self {
        unit.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("no_rounding", RoundingMethod::NoRounding)]
    #[case("nearest", RoundingMethod::Nearest)]
    #[case("UP", RoundingMethod::Up)]
    #[case(" down ", RoundingMethod::Down)]
    fn test_method_from_str(#[case] input: &str, #[case] expected: RoundingMethod) {
        assert_eq!(input.parse::<RoundingMethod>().unwrap(), expected);
    }

    #[test]
    fn test_method_from_str_rejects_unknown() {
        assert!("banker".parse::<RoundingMethod>().is_err());
    }

    #[test]
    fn test_method_from_setting_is_lenient() {
        assert_eq!(RoundingMethod::from_setting("banker"), RoundingMethod::NoRounding);
        assert_eq!(RoundingMethod::from_setting(""), RoundingMethod::NoRounding);
        assert_eq!(RoundingMethod::from_setting("up"), RoundingMethod::Up);
    }

    #[test]
    fn test_method_display_round_trips_settings_spelling() {
        for method in [
            RoundingMethod::NoRounding,
            RoundingMethod::Nearest,
            RoundingMethod::Up,
            RoundingMethod::Down,
        ] {
            assert_eq!(RoundingMethod::from_setting(&method.to_string()), method);
        }
    }

    #[test]
    fn test_cent_constant() {
        assert_eq!(PrecisionUnit::CENT.get(), dec!(0.01));
        assert_eq!(PrecisionUnit::default(), PrecisionUnit::CENT);
    }

    #[rstest]
    #[case("0.01", dec!(0.01))]
    #[case("0.05", dec!(0.05))]
    #[case("1", dec!(1))]
    #[case("0.50", dec!(0.5))]
    #[case("1e-2", dec!(0.01))]
    fn test_precision_from_str(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(input.parse::<PrecisionUnit>().unwrap().get(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-0.05")]
    #[case("abc")]
    #[case("")]
    fn test_precision_rejects_invalid(#[case] input: &str) {
        let err = input.parse::<PrecisionUnit>().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_precision_deserialize_validates() {
        let ok: PrecisionUnit = serde_json::from_str("\"0.05\"").unwrap();
        assert_eq!(ok.get(), dec!(0.05));
        assert!(serde_json::from_str::<PrecisionUnit>("\"0\"").is_err());
    }
}
