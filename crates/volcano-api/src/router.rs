//! Axum router construction for the query API.
//!
//! Assembles the four GET routes into a single [`Router`] with CORS and
//! request tracing middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the query API.
///
/// The router includes:
/// - `GET /test` -- dataset row counts
/// - `GET /country` -- volcano count for a country (`?search=`)
/// - `GET /year` -- eruptions in a year range (`?from=&to=`)
/// - `GET /location` -- nearest volcanoes
///   (`?latitude=&longitude=&erupted_since=`)
///
/// CORS is configured to allow any origin: the API is read-only public
/// data.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/test", get(handlers::service_status))
        .route("/country", get(handlers::country_count))
        .route("/year", get(handlers::eruptions_by_year))
        .route("/location", get(handlers::volcanoes_by_location))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
