//! Pure data structures for the catalog: restaurants and their menu items.
//!
//! Behavior lives next to the data it mutates, in [`crate::restaurant`].

pub mod menu_item;
pub mod restaurant;

pub use menu_item::*;
pub use restaurant::*;
