//! Currency descriptors and the catalog they are looked up in.
//!
//! The catalog is plain data handed to formatters by the caller. The
//! built-in table is only a default; deployments can load their own from
//! configuration without touching this code.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{TallyError, TallyResult};

/// Display metadata for one ISO 4217 currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyDescriptor {
    /// ISO 4217 currency code (e.g., "INR", "USD").
    pub code: String,
    /// Symbol shown next to amounts (e.g., "₹").
    pub symbol: String,
    /// Human readable name (e.g., "Indian Rupee").
    pub display_name: String,
    /// BCP-47 locale tag whose conventions are used for formatting.
    pub locale: String,
}

impl CurrencyDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub fn new(code: &str, symbol: &str, display_name: &str, locale: &str) -> Self {
        Self {
            code: code.to_string(),
            symbol: symbol.to_string(),
            display_name: display_name.to_string(),
            locale: locale.to_string(),
        }
    }
}

/// Read-only lookup table of currency descriptors.
///
/// Always holds at least one entry. The first entry is the fallback for
/// codes the catalog does not know.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Vec<CurrencyDescriptor>")]
pub struct CurrencyCatalog {
    entries: Vec<CurrencyDescriptor>,
    by_code: HashMap<String, usize>,
}

static BUILTIN: Lazy<Arc<CurrencyCatalog>> = Lazy::new(|| {
    let entries = vec![
        CurrencyDescriptor::new("INR", "₹", "Indian Rupee", "en-IN"),
        CurrencyDescriptor::new("USD", "$", "US Dollar", "en-US"),
        CurrencyDescriptor::new("EUR", "€", "Euro", "de-DE"),
        CurrencyDescriptor::new("GBP", "£", "British Pound", "en-GB"),
        CurrencyDescriptor::new("JPY", "￥", "Japanese Yen", "ja-JP"),
        CurrencyDescriptor::new("AUD", "$", "Australian Dollar", "en-AU"),
        CurrencyDescriptor::new("CAD", "$", "Canadian Dollar", "en-CA"),
        CurrencyDescriptor::new("SGD", "$", "Singapore Dollar", "en-SG"),
        CurrencyDescriptor::new("AED", "AED", "UAE Dirham", "en-AE"),
        CurrencyDescriptor::new("CNY", "¥", "Chinese Yuan", "zh-CN"),
    ];
    Arc::new(CurrencyCatalog::from_entries_unchecked(entries))
});

impl CurrencyCatalog {
    /// Builds a catalog from descriptors.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidCatalog` if `entries` is empty or two
    /// descriptors share a code (codes compare case-insensitively).
    pub fn new(entries: Vec<CurrencyDescriptor>) -> TallyResult<Self> {
        if entries.is_empty() {
            return Err(TallyError::InvalidCatalog(
                "catalog must contain at least one currency".to_string(),
            ));
        }

        let mut seen = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            let key = entry.code.trim().to_uppercase();
            if key.is_empty() {
                return Err(TallyError::InvalidCatalog(format!(
                    "entry {idx} has an empty currency code"
                )));
            }
            if seen.insert(key, idx).is_some() {
                return Err(TallyError::InvalidCatalog(format!(
                    "duplicate currency code: {}",
                    entry.code
                )));
            }
        }

        Ok(Self {
            entries,
            by_code: seen,
        })
    }

    fn from_entries_unchecked(entries: Vec<CurrencyDescriptor>) -> Self {
        let by_code = entries
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.code.to_uppercase(), idx))
            .collect();
        Self { entries, by_code }
    }

    /// Returns the shared built-in ten-currency catalog (INR first).
    #[must_use]
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Looks up a descriptor by code, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&CurrencyDescriptor> {
        self.by_code
            .get(&code.trim().to_uppercase())
            .map(|&idx| &self.entries[idx])
    }

    /// Looks up a descriptor, falling back to the first entry for unknown codes.
    ///
    /// The fallback keeps rendering alive but usually means a settings typo,
    /// so it is reported at warn level.
    #[must_use]
    pub fn resolve(&self, code: &str) -> &CurrencyDescriptor {
        if let Some(descriptor) = self.get(code) {
            return descriptor;
        }
        let fallback = self.fallback();
        tracing::warn!(
            requested = %code,
            fallback = %fallback.code,
            "Unknown currency code, using catalog default"
        );
        fallback
    }

    /// The entry used when a code is not found.
    #[must_use]
    pub fn fallback(&self) -> &CurrencyDescriptor {
        &self.entries[0]
    }

    /// Iterates descriptors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyDescriptor> {
        self.entries.iter()
    }

    /// Returns true if the catalog knows `code`.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }
}

impl Default for CurrencyCatalog {
    fn default() -> Self {
        (*Self::builtin()).clone()
    }
}

impl TryFrom<Vec<CurrencyDescriptor>> for CurrencyCatalog {
    type Error = TallyError;

    fn try_from(entries: Vec<CurrencyDescriptor>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}
