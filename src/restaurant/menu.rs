use super::MenuError;
use crate::model::{MenuItem, Restaurant};
use tracing::{debug, info};

impl Restaurant {
    /// Appends a new item to the end of the menu.
    ///
    /// # Errors
    /// - [`MenuError::EmptyName`] if `name` is blank
    /// - [`MenuError::DuplicateItem`] if an item with the same name exists
    ///
    /// The menu is left untouched on failure.
    pub fn add_to_menu(
        &mut self,
        name: impl Into<String>,
        price: u32,
    ) -> Result<&MenuItem, MenuError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MenuError::EmptyName);
        }
        if self.item(&name).is_some() {
            return Err(MenuError::DuplicateItem(name));
        }

        info!(restaurant = %self.name, item = %name, price, size = self.menu.len() + 1, "Added to menu");
        self.menu.push(MenuItem::new(name, price));
        let idx = self.menu.len() - 1;
        Ok(&self.menu[idx])
    }

    /// Removes the item whose name matches exactly and returns it.
    ///
    /// The relative order of the remaining items is preserved.
    pub fn remove_from_menu(&mut self, name: &str) -> Result<MenuItem, MenuError> {
        let idx = self
            .menu
            .iter()
            .position(|item| item.name() == name)
            .ok_or_else(|| MenuError::ItemNotFound(name.to_string()))?;

        let removed = self.menu.remove(idx);
        info!(restaurant = %self.name, item = %name, size = self.menu.len(), "Removed from menu");
        Ok(removed)
    }

    /// The current menu, in insertion order.
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Looks up a menu item by exact name.
    pub fn item(&self, name: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.name() == name)
    }

    /// Sums the prices of the selected items.
    ///
    /// Each occurrence of a name is priced, so selecting an item twice
    /// charges it twice. Names that are not on the menu contribute nothing.
    pub fn calculate_items_cost<S: AsRef<str>>(&self, selected: &[S]) -> u64 {
        let total: u64 = selected
            .iter()
            .filter_map(|name| self.item(name.as_ref()))
            .map(|item| u64::from(item.price()))
            .sum();
        debug!(restaurant = %self.name, selected = selected.len(), total, "Calculated items cost");
        total
    }
}
