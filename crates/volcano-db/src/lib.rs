//! Data layer for the volcano query service (`SQLite`).
//!
//! The dataset is a pre-loaded, effectively read-only `SQLite` file with
//! two tables: `volcanoes` (static reference attributes) and `eruptions`
//! (event records referencing a volcano by foreign key). This crate owns
//! the connection pool and exposes the typed query operations the HTTP
//! layer calls, one parameterized query per operation.
//!
//! # Modules
//!
//! - [`dataset`] -- `SQLite` connection pool and configuration
//! - [`volcano_store`] -- counts, year-range, and nearest-location queries
//! - [`error`] -- shared error type

pub mod dataset;
pub mod error;
pub mod volcano_store;

// Re-export primary types for convenience.
pub use dataset::{DatasetConfig, DatasetPool};
pub use error::DbError;
pub use volcano_store::VolcanoStore;
