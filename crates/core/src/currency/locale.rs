//! Number formatting conventions per BCP-47 locale.
//!
//! Digit grouping and separators come from `num_format`'s CLDR tables; only
//! the currency symbol placement is decided here.

use num_format::{Locale, ToFormattedString};

/// Where the currency symbol sits relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `₹1,234.50`
    Prefix,
    /// `1.234,50 €`
    Suffix,
}

/// The number locale and symbol placement a locale uses for money.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleConventions {
    /// CLDR locale supplying grouping and separators.
    pub number_locale: Locale,
    /// Symbol placement.
    pub symbol_position: SymbolPosition,
    /// Text between symbol and digits.
    pub symbol_spacing: &'static str,
}

pub(crate) const NBSP: &str = "\u{a0}";

const fn prefix(number_locale: Locale) -> LocaleConventions {
    LocaleConventions {
        number_locale,
        symbol_position: SymbolPosition::Prefix,
        symbol_spacing: "",
    }
}

const fn suffix(number_locale: Locale) -> LocaleConventions {
    LocaleConventions {
        number_locale,
        symbol_position: SymbolPosition::Suffix,
        symbol_spacing: NBSP,
    }
}

impl LocaleConventions {
    /// Conventions for a locale tag such as `en-IN` or `de_DE`.
    ///
    /// Tags are matched case-insensitively on language and region; anything
    /// unrecognized formats like `en-US`.
    #[must_use]
    pub fn for_locale(tag: &str) -> Self {
        let tag = tag.trim().replace('_', "-").to_lowercase();
        let mut parts = tag.split('-');
        let language = parts.next().unwrap_or_default();
        let region = parts.next_back().unwrap_or_default();

        match (language, region) {
            ("en" | "hi" | "mr" | "ta" | "te" | "gu" | "kn" | "bn", "in") => prefix(Locale::en_IN),
            ("de", _) => suffix(Locale::de),
            ("it", _) => suffix(Locale::it),
            ("es", _) => suffix(Locale::es),
            ("nl", _) => suffix(Locale::nl),
            ("id", _) => suffix(Locale::id),
            ("fr", _) => suffix(Locale::fr),
            ("en" | "ja" | "zh" | "ko", _) => prefix(Locale::en),
            _ => {
                tracing::debug!(locale = %tag, "No conventions for locale, using en-US");
                prefix(Locale::en)
            }
        }
    }

    /// Groups a whole number with the locale's separator.
    #[must_use]
    pub fn group_digits(&self, value: u128) -> String {
        value.to_formatted_string(&self.number_locale)
    }

    /// Separator between integer and fraction.
    #[must_use]
    pub fn decimal_separator(&self) -> &'static str {
        self.number_locale.decimal()
    }
}
