//! Application configuration management.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::TallyResult;
use crate::types::{CurrencyCatalog, CurrencyDescriptor, SystemSettings};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Rounding and currency preferences.
    #[serde(default)]
    pub settings: SystemSettings,
    /// Replacement currency table. `None` keeps the built-in catalog.
    #[serde(default)]
    pub currencies: Option<Vec<CurrencyDescriptor>>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `TALLY__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> TallyResult<Self> {
        Self::load_with(None)
    }

    /// Same as [`AppConfig::load`] with an extra, required file layered on top
    /// of the config directory and below the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `extra` is missing or any source fails to parse.
    pub fn load_with(extra: Option<&Path>) -> TallyResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = extra {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        tracing::debug!(
            run_mode = %run_mode,
            default_currency = %app_config.settings.default_currency,
            rounding_method = %app_config.settings.rounding_method,
            "Configuration loaded"
        );
        Ok(app_config)
    }

    /// Builds the currency catalog this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidCatalog` if a configured table is empty
    /// or repeats a code.
    pub fn catalog(&self) -> TallyResult<Arc<CurrencyCatalog>> {
        match &self.currencies {
            Some(entries) => Ok(Arc::new(CurrencyCatalog::new(entries.clone())?)),
            None => Ok(CurrencyCatalog::builtin()),
        }
    }
}
