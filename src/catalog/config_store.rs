// Catalog Configuration Sources
//
// Loaders that turn an external configuration handle into a parsed
// `CatalogConfig`. The factory only ever sees the parsed structure.

use crate::error::{ConfigError, ConfigResult};
use crate::models::CatalogConfig;
use std::fs;
use std::path::PathBuf;

/// Something a `PriceCatalogFactory` can load its configuration from
pub trait ConfigSource {
    fn load(&self) -> ConfigResult<CatalogConfig>;
}

/// An already-parsed configuration loads as itself
impl ConfigSource for CatalogConfig {
    fn load(&self) -> ConfigResult<CatalogConfig> {
        Ok(self.clone())
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn load(&self) -> ConfigResult<CatalogConfig> {
        (**self).load()
    }
}

/// JSON configuration file on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for JsonFileSource {
    fn load(&self) -> ConfigResult<CatalogConfig> {
        tracing::debug!("Reading catalog configuration from {}", self.path.display());

        let contents = fs::read_to_string(&self.path).map_err(|source| {
            tracing::warn!("Cannot read {}: {}", self.path.display(), source);
            ConfigError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        JsonStrSource::new(contents).load()
    }
}

/// JSON configuration held in memory
#[derive(Debug, Clone)]
pub struct JsonStrSource {
    json: String,
}

impl JsonStrSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl ConfigSource for JsonStrSource {
    fn load(&self) -> ConfigResult<CatalogConfig> {
        Ok(serde_json::from_str(&self.json)?)
    }
}
