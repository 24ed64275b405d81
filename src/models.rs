use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Symbol used when a configuration does not name a currency
pub const DEFAULT_CURRENCY: &str = "€";

/// Mapping from product code to unit price
///
/// Prices are stored as given: negative values are kept, and a code that is
/// absent resolves to zero rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceCatalog {
    prices: HashMap<String, Decimal>,
}

impl PriceCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Unit price for a product code, if the catalog lists it
    pub fn get(&self, product_code: &str) -> Option<Decimal> {
        self.prices.get(product_code).copied()
    }

    /// Unit price for a product code, zero when the code is unknown
    pub fn price_of(&self, product_code: &str) -> Decimal {
        self.get(product_code).unwrap_or(Decimal::ZERO)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Decimal)> for PriceCatalog {
    fn from_iter<I: IntoIterator<Item = (K, Decimal)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().map(|(code, price)| (code.into(), price)).collect(),
        }
    }
}

/// Display symbol attached to a catalog, never used in arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency(DEFAULT_CURRENCY.to_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Currency {
    fn from(symbol: &str) -> Self {
        Currency::new(symbol)
    }
}

impl From<String> for Currency {
    fn from(symbol: String) -> Self {
        Currency(symbol)
    }
}

/// Parsed price configuration as handed over by a `ConfigSource`
///
/// JSON shape: `{ "products": { "apple": 1.0 }, "currency": "€" }`.
/// `products` is required, `currency` falls back to [`DEFAULT_CURRENCY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub products: PriceCatalog,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl CatalogConfig {
    pub fn new(products: PriceCatalog, currency: Option<String>) -> Self {
        Self { products, currency }
    }

    /// Currency named by the configuration, or the default symbol
    pub fn currency_or_default(&self) -> Currency {
        self.currency
            .as_deref()
            .map(Currency::from)
            .unwrap_or_default()
    }
}
