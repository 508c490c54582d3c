//! Process-level setup shared by binaries built on the catalog.

pub mod tracing;

pub use self::tracing::*;
