//! Error types for menu operations.

use thiserror::Error;

/// Errors that can occur while mutating a restaurant's menu.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuError {
    /// No menu item matches the given name.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// The menu already holds an item with this name.
    #[error("Item already on the menu: {0}")]
    DuplicateItem(String),

    /// Menu item names must contain at least one non-whitespace character.
    #[error("Item name must not be empty")]
    EmptyName,
}
