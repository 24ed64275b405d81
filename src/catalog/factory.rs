use crate::cart::ShoppingCart;
use crate::catalog::ConfigSource;
use crate::error::ConfigResult;
use crate::models::{Currency, PriceCatalog};
use std::sync::Arc;

/// Holds the current pricing configuration and builds carts from it
///
/// Every reload swaps in a fresh catalog handle. Carts created earlier keep
/// the handle they were given, so a reload never changes their receipts.
#[derive(Debug, Clone, Default)]
pub struct PriceCatalogFactory {
    prices: Arc<PriceCatalog>,
    currency: Currency,
}

impl PriceCatalogFactory {
    /// Create a factory with an empty catalog and the default currency
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory from an explicit catalog and currency
    pub fn with_catalog(prices: PriceCatalog, currency: impl Into<Currency>) -> Self {
        Self {
            prices: Arc::new(prices),
            currency: currency.into(),
        }
    }

    /// Create a factory and load its configuration from `source`
    pub fn from_source<S: ConfigSource>(source: S) -> ConfigResult<Self> {
        let mut factory = Self::new();
        factory.load_configuration(source)?;
        Ok(factory)
    }

    /// Replace the catalog and currency with those read from `source`
    ///
    /// Source failures are returned unchanged and leave the current
    /// configuration in place.
    pub fn load_configuration<S: ConfigSource>(&mut self, source: S) -> ConfigResult<()> {
        let config = source.load()?;
        let currency = config.currency_or_default();

        tracing::info!(
            "Loaded price catalog with {} products (currency {})",
            config.products.len(),
            currency
        );

        self.prices = Arc::new(config.products);
        self.currency = currency;
        Ok(())
    }

    /// New empty cart observing the catalog as it is right now
    pub fn create_cart(&self) -> ShoppingCart {
        tracing::debug!("Creating shopping cart");
        ShoppingCart::with_shared_catalog(Arc::clone(&self.prices), self.currency.clone())
    }

    pub fn prices(&self) -> &PriceCatalog {
        &self.prices
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::JsonStrSource;
    use crate::error::ConfigError;
    use crate::models::CatalogConfig;
    use rust_decimal_macros::dec;

    fn fruit_config(currency: Option<&str>) -> CatalogConfig {
        CatalogConfig::new(
            [("apple", dec!(1.0)), ("banana", dec!(1.1)), ("kiwi", dec!(3.0))]
                .into_iter()
                .collect(),
            currency.map(str::to_string),
        )
    }

    #[test]
    fn test_new_factory_is_empty_with_default_currency() {
        let factory = PriceCatalogFactory::new();
        assert!(factory.prices().is_empty());
        assert_eq!(factory.currency().as_str(), "€");
    }

    #[test]
    fn test_load_configuration_replaces_catalog_and_currency() {
        let mut factory = PriceCatalogFactory::new();
        factory.load_configuration(fruit_config(Some("£"))).unwrap();

        assert_eq!(factory.prices().price_of("banana"), dec!(1.1));
        assert_eq!(factory.currency().as_str(), "£");
    }

    #[test]
    fn test_load_configuration_defaults_currency_when_absent() {
        let mut factory = PriceCatalogFactory::with_catalog(PriceCatalog::new(), "£");
        factory.load_configuration(fruit_config(None)).unwrap();

        assert_eq!(factory.currency().as_str(), "€");
    }

    #[test]
    fn test_failed_load_keeps_previous_configuration() {
        let mut factory = PriceCatalogFactory::from_source(fruit_config(Some("£"))).unwrap();

        let err = factory
            .load_configuration(JsonStrSource::new("not json"))
            .unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
        assert_eq!(factory.prices().price_of("kiwi"), dec!(3.0));
        assert_eq!(factory.currency().as_str(), "£");
    }

    #[test]
    fn test_create_cart_shares_catalog_handle() {
        let factory = PriceCatalogFactory::from_source(fruit_config(None)).unwrap();
        let cart = factory.create_cart();

        assert!(Arc::ptr_eq(&factory.prices, cart.shared_prices()));
        assert!(cart.is_empty());
        assert_eq!(cart.currency(), factory.currency());
    }

    #[test]
    fn test_reload_does_not_touch_existing_carts() {
        let mut factory = PriceCatalogFactory::from_source(fruit_config(None)).unwrap();
        let cart = factory.create_cart();

        factory
            .load_configuration(CatalogConfig::new(
                [("apple", dec!(9.99))].into_iter().collect(),
                Some("£".to_string()),
            ))
            .unwrap();

        assert_eq!(cart.prices().price_of("apple"), dec!(1.0));
        assert_eq!(cart.currency().as_str(), "€");
        assert_eq!(factory.create_cart().prices().price_of("apple"), dec!(9.99));
    }
}
