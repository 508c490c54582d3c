use crate::model::{MenuItem, MenuItemCreate};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A restaurant with its location, operating hours and menu.
///
/// Name, location and hours are fixed at construction. The menu is mutated in
/// place through the operations in [`crate::restaurant`]; item names stay
/// unique and insertion order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    pub(crate) name: String,
    pub(crate) location: String,
    pub(crate) opening_time: NaiveTime,
    pub(crate) closing_time: NaiveTime,
    pub(crate) menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Creates a new Restaurant with an empty menu.
    ///
    /// # Arguments
    /// * `name` - Restaurant name, used as its key in a directory
    /// * `location` - Free-text location
    /// * `opening_time` - Start of the daily operating window (inclusive)
    /// * `closing_time` - End of the daily operating window (exclusive)
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            opening_time,
            closing_time,
            menu: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn opening_time(&self) -> NaiveTime {
        self.opening_time
    }

    pub fn closing_time(&self) -> NaiveTime {
        self.closing_time
    }
}

/// Payload for registering a restaurant, as read from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub location: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    #[serde(default)]
    pub menu: Vec<MenuItemCreate>,
}
