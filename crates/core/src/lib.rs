//! Rounding and currency formatting engine for Tally.
//!
//! This crate contains pure, stateless formatting logic with ZERO network or
//! storage dependencies. Document screens (invoices, credit notes, purchase
//! orders, goods-receive notes) call it to render amounts consistently.
//!
//! # Modules
//!
//! - `rounding` - Precision-unit rounding and fixed decimal-place rounding
//! - `currency` - Locale-aware monetary formatting
//! - `percent` - Percentage and tax-rate display
//! - `date` - Document date display
//! - `service` - Formatter bound to system settings and a currency catalog

pub mod currency;
pub mod date;
pub mod percent;
pub mod rounding;
pub mod service;

#[cfg(test)]
mod props;

pub use currency::format_currency;
pub use date::{DateInput, format_date};
pub use percent::{format_percentage, format_tax_rate};
pub use rounding::{RoundingAdjustment, RoundingConfig, round, round_money, round_to_decimals};
pub use service::Formatter;
