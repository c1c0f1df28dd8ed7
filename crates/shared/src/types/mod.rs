//! Common types used across the application.

pub mod currency;
pub mod rounding;
pub mod settings;

pub use currency::{CurrencyCatalog, CurrencyDescriptor};
pub use rounding::{PrecisionUnit, RoundingMethod};
pub use settings::SystemSettings;
