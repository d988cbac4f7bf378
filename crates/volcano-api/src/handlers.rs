//! REST endpoint handlers for the volcano query API.
//!
//! All handlers validate their query parameters by hand on optional raw
//! strings, so missing and malformed input produce the exact plain-text
//! failure bodies this service has always returned rather than the
//! framework's default rejection shape.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/test` | Dataset row counts (service health check) |
//! | `GET` | `/country` | Number of volcanoes in a country |
//! | `GET` | `/year` | Eruptions within a year range (JSON) |
//! | `GET` | `/location` | Nearest recently-erupting volcanoes (XML) |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use volcano_db::VolcanoStore;
use volcano_types::EruptionRecord;

use crate::error::ApiError;
use crate::state::AppState;
use crate::xml;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /country` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct CountryQuery {
    /// Country name to count volcanoes for (URL-decoded by the extractor).
    pub search: Option<String>,
}

/// Query parameters for the `GET /year` endpoint.
///
/// Raw strings: parsing failures must map to the endpoint's own 400
/// body, not an extractor rejection.
#[derive(Debug, serde::Deserialize)]
pub struct YearQuery {
    /// Start year, inclusive.
    pub from: Option<String>,
    /// End year, inclusive.
    pub to: Option<String>,
}

/// Query parameters for the `GET /location` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct LocationQuery {
    /// Query point latitude, decimal degrees.
    pub latitude: Option<String>,
    /// Query point longitude, decimal degrees.
    pub longitude: Option<String>,
    /// Only volcanoes with an eruption at or after this year qualify.
    pub erupted_since: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /test -- dataset row counts
// ---------------------------------------------------------------------------

/// Report the volcano and eruption row counts as plain text.
///
/// Doubles as the service health check: it proves the HTTP layer and
/// the dataset connection are both alive.
pub async fn service_status(State(state): State<Arc<AppState>>) -> Result<String, ApiError> {
    let store = VolcanoStore::new(state.db.pool());
    let volcanoes = store.count_volcanoes().await?;
    let eruptions = store.count_eruptions().await?;

    Ok(format!(
        "Number of volcanoes: {volcanoes}\nNumber of eruptions: {eruptions}"
    ))
}

// ---------------------------------------------------------------------------
// GET /country -- volcano count for a country
// ---------------------------------------------------------------------------

/// Count volcanoes in the country named by the `search` parameter.
///
/// A missing or blank parameter yields the literal body
/// `Invalid Country` with status 200, which is the service's historical
/// behavior. The match is exact and case-sensitive; zero matches return
/// `0`, not an error.
pub async fn country_count(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CountryQuery>,
) -> Result<String, ApiError> {
    let Some(country) = params.search else {
        return Ok(String::from("Invalid Country"));
    };
    if country.trim().is_empty() {
        return Ok(String::from("Invalid Country"));
    }

    let store = VolcanoStore::new(state.db.pool());
    // The blank check trims; the lookup uses the parameter as received.
    let count = store.count_in_country(&country).await?;
    Ok(count.to_string())
}

// ---------------------------------------------------------------------------
// GET /year -- eruptions in a year range
// ---------------------------------------------------------------------------

/// Return eruptions whose year falls within `[from, to]` as a JSON
/// array.
///
/// Both parameters must be present, parse as integers, and satisfy
/// `from <= to`; anything else is a 400 with body `Invalid year range`.
/// An empty match is an empty array, not an error.
pub async fn eruptions_by_year(
    State(state): State<Arc<AppState>>,
    Query(params): Query<YearQuery>,
) -> Result<Json<Vec<EruptionRecord>>, ApiError> {
    let (Some(from_raw), Some(to_raw)) = (params.from, params.to) else {
        return Err(ApiError::YearRange);
    };
    let from = from_raw.parse::<i32>().ok().ok_or(ApiError::YearRange)?;
    let to = to_raw.parse::<i32>().ok().ok_or(ApiError::YearRange)?;
    if from > to {
        return Err(ApiError::YearRange);
    }

    let store = VolcanoStore::new(state.db.pool());
    let records = store.eruptions_in_year_range(from, to).await?;
    Ok(Json(records))
}

// ---------------------------------------------------------------------------
// GET /location -- nearest recently-erupting volcanoes
// ---------------------------------------------------------------------------

/// Return the ten volcanoes nearest the query point that erupted at or
/// after `erupted_since`, as a `<Volcanoes>` XML document.
///
/// All three parameters must be present and parse (floats for the
/// coordinates, integer for the year); anything else is a 400 with body
/// `Invalid parameters`. No matches yield the empty `<Volcanoes/>`
/// element.
pub async fn volcanoes_by_location(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LocationQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(lat_raw), Some(lon_raw), Some(since_raw)) =
        (params.latitude, params.longitude, params.erupted_since)
    else {
        return Err(ApiError::Parameters);
    };
    let latitude = lat_raw.parse::<f64>().ok().ok_or(ApiError::Parameters)?;
    let longitude = lon_raw.parse::<f64>().ok().ok_or(ApiError::Parameters)?;
    let erupted_since = since_raw.parse::<i32>().ok().ok_or(ApiError::Parameters)?;

    let store = VolcanoStore::new(state.db.pool());
    let volcanoes = store
        .nearest_volcanoes(latitude, longitude, erupted_since)
        .await?;
    let body = xml::render_volcanoes(&volcanoes)?;

    Ok(([(header::CONTENT_TYPE, "application/xml")], body))
}
