//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `TallyError`.
pub type TallyResult<T> = Result<T, TallyError>;

/// Application error types.
///
/// Formatting itself never fails; these errors surface while building the
/// inputs formatting depends on (settings, catalogs, configuration).
#[derive(Debug, Error)]
pub enum TallyError {
    /// A settings value failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A currency catalog is unusable (empty, duplicate codes).
    #[error("Invalid currency catalog: {0}")]
    InvalidCatalog(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl TallyError {
    /// Returns a stable, machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidCatalog(_) => "INVALID_CATALOG",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}
