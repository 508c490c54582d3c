//! Error types for the restaurant directory.

use thiserror::Error;

/// Errors that can occur during directory operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// No restaurant in the directory has the given name.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    /// A restaurant with this name is already registered.
    #[error("Restaurant already exists: {0}")]
    AlreadyExists(String),
}
