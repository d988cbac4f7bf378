//! HTTP query API for the volcano eruption dataset.
//!
//! This crate provides an Axum HTTP server exposing four read-only GET
//! endpoints over the dataset:
//!
//! - **`/test`** -- volcano and eruption row counts (plain text)
//! - **`/country`** -- number of volcanoes in a country (plain text)
//! - **`/year`** -- eruptions within a year range (JSON array)
//! - **`/location`** -- the ten nearest volcanoes with a recent eruption
//!   (XML document)
//!
//! # Architecture
//!
//! Requests are stateless. Each handler validates its query parameters,
//! runs one [`VolcanoStore`](volcano_db::VolcanoStore) operation on a
//! pooled connection scoped to the request, shapes the response
//! (plain text, JSON, or XML), and releases the connection on every
//! exit path. Client input errors surface as short plain-text 400
//! bodies; data-layer faults surface as 500 responses without taking
//! the process down.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod xml;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
