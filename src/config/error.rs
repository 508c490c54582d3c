//! Error types for configuration loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid catalog TOML.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
