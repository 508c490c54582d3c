use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A named, priced entry on a restaurant's menu.
///
/// Items are immutable once added; replacing one means removing it and adding
/// a new entry via [`Restaurant::add_to_menu`](crate::model::Restaurant::add_to_menu).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,
    price: u32,
}

impl MenuItem {
    /// Creates a new MenuItem.
    ///
    /// # Arguments
    /// * `name` - Item name, unique within a single menu
    /// * `price` - Price in whole currency units
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

impl Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.price)
    }
}

/// Payload describing a menu item to add, as read from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: u32,
}
