//! TOML configuration for seeding a directory.
//!
//! ```toml
//! [directory]
//! duplicate_names = "reject"
//!
//! [[restaurants]]
//! name = "Amelie's cafe"
//! location = "Chennai"
//! opening_time = "10:30:00"
//! closing_time = "22:00:00"
//! menu = [
//!     { name = "Sweet corn soup", price = 119 },
//!     { name = "Vegetable lasagne", price = 269 },
//! ]
//! ```
//!
//! Both sections are optional.

pub mod error;

pub use error::*;

use crate::directory::DuplicatePolicy;
use crate::model::RestaurantCreate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub directory: DirectorySettings,
    #[serde(default)]
    pub restaurants: Vec<RestaurantCreate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectorySettings {
    #[serde(default)]
    pub duplicate_names: DuplicatePolicy,
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
