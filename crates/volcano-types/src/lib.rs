//! Shared type definitions for the volcano query service.
//!
//! This crate is the single source of truth for the entity and response
//! types used across the workspace. It carries no database or HTTP
//! dependencies so both the data layer and the API layer can depend on it
//! without pulling in each other's stacks.
//!
//! # Modules
//!
//! - [`ids`] -- type-safe wrapper for volcano identifiers
//! - [`records`] -- joined query-result records served by the API

pub mod ids;
pub mod records;

// Re-export all public types at crate root for convenience.
pub use ids::VolcanoId;
pub use records::{EruptionRecord, NearbyVolcano, Place};
