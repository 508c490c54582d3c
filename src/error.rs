//! Crate-level error type.

use crate::config::ConfigError;
use crate::directory::DirectoryError;
use crate::restaurant::MenuError;
use thiserror::Error;

/// Any failure surfaced by the catalog.
///
/// Lets callers chain directory and menu operations with `?`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A time-of-day outside `00:00:00..24:00:00`.
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),
}
