//! Restaurant aggregate logic: menu management, order cost and opening hours.
//!
//! The data itself is [`Restaurant`](crate::model::Restaurant); this module
//! adds the behavior on top of it.

pub mod error;
mod hours;
mod menu;

pub use error::*;
