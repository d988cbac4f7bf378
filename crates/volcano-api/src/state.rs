//! Shared application state for the query API server.
//!
//! [`AppState`] holds the dataset connection pool. Requests are
//! stateless: each handler borrows the pool, runs one store operation on
//! a pooled connection scoped to the request, and releases it on every
//! exit path.

use volcano_db::DatasetPool;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. Cloning is cheap: the pool is reference-counted
/// internally.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool to the volcano dataset.
    pub db: DatasetPool,
}

impl AppState {
    /// Create application state around an open dataset pool.
    pub const fn new(db: DatasetPool) -> Self {
        Self { db }
    }
}
