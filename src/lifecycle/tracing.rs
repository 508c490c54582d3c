//! # Observability & Tracing
//!
//! The catalog emits structured `tracing` events whenever state changes:
//!
//! - **Directory**: restaurants added, removed, loaded from config
//! - **Menu**: items added and removed, with running menu size
//! - **Queries**: lookups, cost calculations and opening-hours checks (debug)
//!
//! Failures are returned to the caller as errors; the core does not log them.
//!
//! ## Usage
//!
//! ```bash
//! # State changes only
//! RUST_LOG=info cargo run
//!
//! # Include lookups and cost calculations
//! RUST_LOG=debug cargo run
//!
//! # Only this crate
//! RUST_LOG=restaurant_finder=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` the demo prints something like:
//!
//! ```text
//! INFO setup: Added restaurant restaurant=Amelie's cafe size=1
//! INFO setup: Added to menu restaurant=Amelie's cafe item=Sweet corn soup price=119 size=1
//! DEBUG order: Calculated items cost restaurant=Amelie's cafe selected=2 total=388
//! ```

/// Initializes the global subscriber.
///
/// Verbosity comes from `RUST_LOG`. Output is compact with span names inline
/// and module paths hidden.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
