//! Currency formatting.

pub mod format;
pub mod locale;

pub use format::{format_currency, format_currency_in, format_money, format_number};
pub use locale::{LocaleConventions, SymbolPosition};
