// Error types for catalog configuration loading
// Cart operations never fail; only loading a price configuration can

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration loading
///
/// Raised by a `ConfigSource` and propagated unchanged through
/// `PriceCatalogFactory::load_configuration` to the caller.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be opened or read
    #[error("Failed to read configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON, lacks the products mapping,
    /// or carries a price that is not a number
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
