//! The in-memory collection of known restaurants.
//!
//! [`RestaurantDirectory`] owns every [`Restaurant`] registered with it.
//! Callers look a restaurant up by name and then work on it directly:
//!
//! ```ignore
//! let mut directory = RestaurantDirectory::new();
//! let cafe = directory.add_restaurant("Amelie's cafe", "Chennai", open, close)?;
//! cafe.add_to_menu("Sweet corn soup", 119)?;
//!
//! let total = directory
//!     .find_restaurant_by_name("Amelie's cafe")?
//!     .calculate_items_cost(&["Sweet corn soup"]);
//! ```

pub mod error;

pub use error::*;

use crate::clock::Clock;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::model::Restaurant;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// How [`RestaurantDirectory::add_restaurant`] treats a name that is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Refuse the new restaurant with [`DirectoryError::AlreadyExists`].
    #[default]
    Reject,
    /// Register it anyway. Lookups and removal resolve to the first match.
    Allow,
}

/// Registry of restaurants, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RestaurantDirectory {
    restaurants: Vec<Restaurant>,
    policy: DuplicatePolicy,
}

impl RestaurantDirectory {
    /// Creates an empty directory that rejects duplicate names.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            restaurants: Vec::new(),
            policy,
        }
    }

    /// Builds a directory seeded with the restaurants and menus in `config`.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut directory = Self::with_policy(config.directory.duplicate_names);
        for entry in &config.restaurants {
            let restaurant = directory.add_restaurant(
                entry.name.clone(),
                entry.location.clone(),
                entry.opening_time,
                entry.closing_time,
            )?;
            for item in &entry.menu {
                restaurant.add_to_menu(item.name.clone(), item.price)?;
            }
        }
        info!(size = directory.len(), "Directory loaded from config");
        Ok(directory)
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Registers a new restaurant with an empty menu and returns it for
    /// immediate menu population.
    pub fn add_restaurant(
        &mut self,
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Result<&mut Restaurant, DirectoryError> {
        let name = name.into();
        if self.policy == DuplicatePolicy::Reject && self.position(&name).is_some() {
            return Err(DirectoryError::AlreadyExists(name));
        }

        let restaurant = Restaurant::new(name, location, opening_time, closing_time);
        info!(restaurant = %restaurant.name(), size = self.restaurants.len() + 1, "Added restaurant");
        self.restaurants.push(restaurant);
        let idx = self.restaurants.len() - 1;
        Ok(&mut self.restaurants[idx])
    }

    /// Finds the first restaurant whose name matches exactly.
    pub fn find_restaurant_by_name(&self, name: &str) -> Result<&Restaurant, DirectoryError> {
        let idx = self.position(name);
        debug!(restaurant = %name, found = idx.is_some(), "Find");
        idx.map(|i| &self.restaurants[i])
            .ok_or_else(|| DirectoryError::RestaurantNotFound(name.to_string()))
    }

    /// Like [`find_restaurant_by_name`](Self::find_restaurant_by_name), but
    /// returns a handle that can mutate the menu.
    pub fn find_restaurant_by_name_mut(
        &mut self,
        name: &str,
    ) -> Result<&mut Restaurant, DirectoryError> {
        let idx = self.position(name);
        debug!(restaurant = %name, found = idx.is_some(), "Find");
        match idx {
            Some(i) => Ok(&mut self.restaurants[i]),
            None => Err(DirectoryError::RestaurantNotFound(name.to_string())),
        }
    }

    /// Removes the first restaurant whose name matches exactly and hands it back.
    pub fn remove_restaurant(&mut self, name: &str) -> Result<Restaurant, DirectoryError> {
        let idx = self
            .position(name)
            .ok_or_else(|| DirectoryError::RestaurantNotFound(name.to_string()))?;
        let removed = self.restaurants.remove(idx);
        info!(restaurant = %name, size = self.restaurants.len(), "Removed restaurant");
        Ok(removed)
    }

    /// All registered restaurants, in insertion order.
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Restaurants open at the clock's current time, in insertion order.
    pub fn open_restaurants(&self, clock: &impl Clock) -> Vec<&Restaurant> {
        let now = clock.now();
        self.restaurants
            .iter()
            .filter(|r| r.is_open_at(now))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.restaurants.iter().position(|r| r.name() == name)
    }
}
