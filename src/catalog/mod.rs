// Price catalog configuration and the factory that stamps out carts

pub mod config_store;
pub mod factory;

pub use config_store::{ConfigSource, JsonFileSource, JsonStrSource};
pub use factory::PriceCatalogFactory;
