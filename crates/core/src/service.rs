//! Formatting service bound to system settings and a currency catalog.
//!
//! Screens hold one [`Formatter`] built from the settings record and call it
//! for every amount they render, instead of threading the catalog, rounding
//! policy and default currency through each call.

use std::sync::Arc;

use rust_decimal::Decimal;
use tally_shared::types::{CurrencyCatalog, CurrencyDescriptor, SystemSettings};
use tally_shared::{AppConfig, TallyResult};

use crate::currency::format_currency_in;
use crate::rounding::{RoundingAdjustment, RoundingConfig};

/// Formats money according to injected settings.
#[derive(Debug, Clone)]
pub struct Formatter {
    catalog: Arc<CurrencyCatalog>,
    rounding: RoundingConfig,
    default_currency: String,
}

impl Formatter {
    /// Creates a formatter from its parts.
    #[must_use]
    pub fn new(
        catalog: Arc<CurrencyCatalog>,
        rounding: RoundingConfig,
        default_currency: impl Into<String>,
    ) -> Self {
        let default_currency = default_currency.into();
        if !catalog.contains(&default_currency) {
            tracing::warn!(
                currency = %default_currency,
                fallback = %catalog.fallback().code,
                "Default currency not in catalog"
            );
        }
        Self {
            catalog,
            rounding,
            default_currency,
        }
    }

    /// Builds a formatter from system settings and a catalog.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the settings' rounding precision is
    /// not a positive decimal.
    pub fn from_settings(
        settings: &SystemSettings,
        catalog: Arc<CurrencyCatalog>,
    ) -> TallyResult<Self> {
        let rounding = RoundingConfig::from_settings(settings)?;
        Ok(Self::new(catalog, rounding, settings.default_currency.clone()))
    }

    /// Builds a formatter from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured catalog or rounding precision is
    /// invalid.
    pub fn from_config(config: &AppConfig) -> TallyResult<Self> {
        Self::from_settings(&config.settings, config.catalog()?)
    }

    /// Formats `amount` in currency `code`, optionally in another locale.
    #[must_use]
    pub fn format_currency(&self, amount: Decimal, code: &str, locale: Option<&str>) -> String {
        format_currency_in(&self.catalog, amount, code, locale)
    }

    /// Formats `amount` in the settings' default currency.
    #[must_use]
    pub fn format_default(&self, amount: Decimal) -> String {
        self.format_currency(amount, &self.default_currency, None)
    }

    /// Applies the settings' rounding policy.
    #[must_use]
    pub fn apply_rounding(&self, value: Decimal) -> Decimal {
        self.rounding.apply(value)
    }

    /// Applies the rounding policy and reports the round-off.
    #[must_use]
    pub fn rounding_adjustment(&self, value: Decimal) -> RoundingAdjustment {
        self.rounding.adjust(value)
    }

    /// Descriptor for `code`, with catalog fallback.
    #[must_use]
    pub fn currency(&self, code: &str) -> &CurrencyDescriptor {
        self.catalog.resolve(code)
    }

    /// Descriptor for the settings' default currency.
    #[must_use]
    pub fn default_currency(&self) -> &CurrencyDescriptor {
        self.catalog.resolve(&self.default_currency)
    }

    /// All currencies, in catalog order.
    pub fn currencies(&self) -> impl Iterator<Item = &CurrencyDescriptor> {
        self.catalog.iter()
    }

    /// The rounding policy in effect.
    #[must_use]
    pub const fn rounding(&self) -> RoundingConfig {
        self.rounding
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(
            CurrencyCatalog::builtin(),
            RoundingConfig::disabled(),
            CurrencyCatalog::builtin().fallback().code.clone(),
        )
    }
}
