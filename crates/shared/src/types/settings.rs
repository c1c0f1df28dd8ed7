//! System settings as delivered by the settings provider.

use serde::{Deserialize, Serialize};

use super::rounding::{PrecisionUnit, RoundingMethod};
use crate::error::TallyResult;

/// Rounding and currency preferences, kept as the raw strings the
/// settings screen stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    /// Rounding method name (`no_rounding`, `nearest`, `up`, `down`).
    #[serde(default = "default_rounding_method")]
    pub rounding_method: String,
    /// Rounding precision unit as text (e.g., "0.05").
    #[serde(default = "default_rounding_precision")]
    pub rounding_precision: String,
    /// ISO 4217 code of the currency documents are shown in.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

fn default_rounding_method() -> String {
    "nearest".to_string()
}

fn default_rounding_precision() -> String {
    "0.01".to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            rounding_method: default_rounding_method(),
            rounding_precision: default_rounding_precision(),
            default_currency: default_currency(),
        }
    }
}

impl SystemSettings {
    /// Parsed rounding method; unknown names disable rounding.
    #[must_use]
    pub fn rounding_method(&self) -> RoundingMethod {
        RoundingMethod::from_setting(&self.rounding_method)
    }

    /// Parsed precision unit.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the stored precision is not a
    /// positive decimal.
    pub fn precision_unit(&self) -> TallyResult<PrecisionUnit> {
        self.rounding_precision.parse()
    }
}
