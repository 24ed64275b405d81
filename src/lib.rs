// Shopping cart library
//
// A price catalog factory builds carts; carts accumulate line items and render
// a receipt against the catalog they were created with.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod models;

pub use cart::{Cart, PriceCalculator, ReceiptEntry, ShoppingCart};
pub use catalog::{ConfigSource, JsonFileSource, JsonStrSource, PriceCatalogFactory};
pub use error::{ConfigError, ConfigResult};
pub use models::{CatalogConfig, Currency, PriceCatalog, DEFAULT_CURRENCY};
