//! Error types for the query API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//!
//! Client input errors carry the exact short plain-text bodies the
//! service has always returned. Data-layer faults become 500 responses
//! per request; the process stays alive.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use volcano_db::DbError;

/// Errors that can occur while handling a query request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The year-range parameters were missing, malformed, or inverted.
    #[error("invalid year range")]
    YearRange,

    /// The location parameters were missing or malformed.
    #[error("invalid parameters")]
    Parameters,

    /// A data-layer operation failed.
    #[error("database error: {0}")]
    Database(#[from] DbError),

    /// The XML response document could not be serialized.
    #[error("XML serialization error: {0}")]
    Xml(#[from] quick_xml::SeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::YearRange => (StatusCode::BAD_REQUEST, "Invalid year range"),
            Self::Parameters => (StatusCode::BAD_REQUEST, "Invalid parameters"),
            Self::Database(e) => {
                tracing::error!(error = %e, "Data layer failure while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error")
            }
            Self::Xml(e) => {
                tracing::error!(error = %e, "Failed to serialize XML response");
                (StatusCode::INTERNAL_SERVER_ERROR, "Serialization error")
            }
        };

        (status, body).into_response()
    }
}
