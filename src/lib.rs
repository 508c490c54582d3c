//! # Restaurant Finder
//!
//! An in-memory catalog of restaurants, their menus and opening hours.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! Plain structs: [`Restaurant`](model::Restaurant) and [`MenuItem`](model::MenuItem),
//! plus the `*Create` payloads used when seeding from configuration.
//!
//! ### 2. The Aggregate ([`restaurant`])
//! Behavior on a single restaurant: adding and removing menu items, pricing a
//! selection of items, and deciding whether it is open.
//! - **Key items**: [`add_to_menu`](model::Restaurant::add_to_menu),
//!   [`calculate_items_cost`](model::Restaurant::calculate_items_cost),
//!   [`is_restaurant_open`](model::Restaurant::is_restaurant_open).
//!
//! ### 3. The Service ([`directory`])
//! [`RestaurantDirectory`](directory::RestaurantDirectory) owns all restaurants
//! and exposes registration, lookup and removal by exact name.
//!
//! ### 4. Time ([`clock`])
//! Opening-hours checks take a [`Clock`](clock::Clock) instead of reading the
//! system time, so tests can pin the time with [`FixedClock`](clock::FixedClock).
//!
//! ### 5. Plumbing ([`config`], [`error`], [`lifecycle`])
//! TOML seeding, the crate-wide [`CatalogError`](error::CatalogError), and
//! tracing setup.
//!
//! ## Error Handling
//! Each area has its own error type ([`MenuError`](restaurant::MenuError),
//! [`DirectoryError`](directory::DirectoryError),
//! [`ConfigError`](config::ConfigError)). [`CatalogError`](error::CatalogError)
//! wraps them with `#[from]` so mixed call chains can use `?`.
//! Failed operations leave state untouched.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run -- catalog.toml
//! ```

pub mod clock;
pub mod config;
pub mod directory;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod restaurant;
