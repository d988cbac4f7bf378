//! Integration tests for the volcano query API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server, against a seeded in-memory `SQLite` dataset.
//! This validates parameter handling, routing, and response shaping
//! end to end.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::too_many_lines
)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;
use volcano_api::router::build_router;
use volcano_api::state::AppState;
use volcano_db::DatasetPool;

// =========================================================================
// Helpers
// =========================================================================

/// Build a router over an in-memory dataset seeded with:
///
/// - Etna (id 1, Italy) -- eruptions 2021-02-16 and 1999-07-22
/// - Vesuvius (id 2, Italy) -- eruption 1944-03-17
/// - "Smoky & Peak <North>" (id 3, Testland) -- eruption 2010-05-05
async fn make_test_router() -> Router {
    let pool = DatasetPool::connect_in_memory()
        .await
        .expect("Failed to open in-memory SQLite database");
    pool.run_migrations()
        .await
        .expect("Failed to run migrations");

    let volcanoes: [(i64, &str, &str, f64, f64, i64, &str); 3] = [
        (1, "Etna", "Italy", 37.75, 15.0, 3329, "Stratovolcano"),
        (2, "Vesuvius", "Italy", 40.82, 14.43, 1281, "Stratovolcano"),
        (3, "Smoky & Peak <North>", "Testland", 10.0, 10.0, 500, "Caldera"),
    ];
    for (id, name, country, lat, lon, elevation, volcano_type) in volcanoes {
        sqlx::query(
            "INSERT INTO volcanoes (ID, Name, Country, Latitude, Longitude, Elevation, Type)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(id)
        .bind(name)
        .bind(country)
        .bind(lat)
        .bind(lon)
        .bind(elevation)
        .bind(volcano_type)
        .execute(pool.pool())
        .await
        .expect("Failed to insert volcano");
    }

    let eruptions: [(i64, &str, Option<i64>); 4] = [
        (1, "2021-02-16", Some(0)),
        (1, "1999-07-22", None),
        (2, "1944-03-17", Some(26)),
        (3, "2010-05-05", None),
    ];
    for (volcano_id, date, deaths) in eruptions {
        sqlx::query(
            "INSERT INTO eruptions (Volcano_ID, Date, Deaths, Missing, Injuries)
             VALUES (?1, ?2, ?3, NULL, NULL)",
        )
        .bind(volcano_id)
        .bind(date)
        .bind(deaths)
        .execute(pool.pool())
        .await
        .expect("Failed to insert eruption");
    }

    build_router(Arc::new(AppState::new(pool)))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    (status, content_type, body)
}

// =========================================================================
// GET /test
// =========================================================================

#[tokio::test]
async fn test_route_reports_row_counts() {
    let router = make_test_router().await;
    let (status, _, body) = get(router, "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Number of volcanoes: 3\nNumber of eruptions: 4");
}

// =========================================================================
// GET /country
// =========================================================================

#[tokio::test]
async fn country_returns_count_for_exact_match() {
    let router = make_test_router().await;
    let (status, _, body) = get(router, "/country?search=Italy").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "2");
}

#[tokio::test]
async fn country_match_is_case_sensitive() {
    let router = make_test_router().await;
    let (status, _, body) = get(router, "/country?search=italy").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "0");
}

#[tokio::test]
async fn country_with_no_matches_returns_zero() {
    let router = make_test_router().await;
    let (status, _, body) = get(router, "/country?search=Atlantis").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "0");
}

#[tokio::test]
async fn country_missing_parameter_is_invalid() {
    let router = make_test_router().await;
    let (status, _, body) = get(router, "/country").await;

    // Historical behavior: the failure body rides on a 200.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Invalid Country");
}

#[tokio::test]
async fn country_blank_parameter_is_invalid() {
    let router = make_test_router().await;
    let (status, _, body) = get(router, "/country?search=%20%20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Invalid Country");
}

// =========================================================================
// GET /year
// =========================================================================

#[tokio::test]
async fn year_returns_matching_eruptions_as_json() {
    let router = make_test_router().await;
    let (status, content_type, body) = get(router, "/year?from=2000&to=2022").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/json"));

    let json: Value = serde_json::from_str(&body).unwrap();
    let dates: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|record| record["date"].as_str())
        .collect();
    // Ascending by raw date string; the 1999 and 1944 eruptions excluded.
    assert_eq!(dates, vec!["2010-05-05", "2021-02-16"]);
}

#[tokio::test]
async fn year_record_carries_location_and_casualty_defaults() {
    let router = make_test_router().await;
    let (_, _, body) = get(router, "/year?from=2021&to=2021").await;

    let json: Value = serde_json::from_str(&body).unwrap();
    let record = &json.as_array().unwrap()[0];
    assert_eq!(record["name"], "Etna");
    assert_eq!(record["location"]["country"], "Italy");
    assert_eq!(record["location"]["elevation"], 3329);
    assert_eq!(record["deaths"], 0);
    // Stored as NULL, surfaced as zero.
    assert_eq!(record["missing"], 0);
    assert_eq!(record["injuries"], 0);
}

#[tokio::test]
async fn year_with_no_matches_returns_empty_array() {
    let router = make_test_router().await;
    let (status, _, body) = get(router, "/year?from=1000&to=1001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn year_inverted_range_is_rejected() {
    let router = make_test_router().await;
    let (status, _, body) = get(router, "/year?from=2022&to=2000").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid year range");
}

#[tokio::test]
async fn year_malformed_parameter_is_rejected() {
    let router = make_test_router().await;
    let (status, _, body) = get(router, "/year?from=abc&to=2022").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid year range");
}

#[tokio::test]
async fn year_missing_parameter_is_rejected() {
    let router = make_test_router().await;
    let (status, _, body) = get(router, "/year?from=2000").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid year range");
}

// =========================================================================
// GET /location
// =========================================================================

#[tokio::test]
async fn location_returns_nearest_volcanoes_as_xml() {
    let router = make_test_router().await;
    let (status, content_type, body) =
        get(router, "/location?latitude=37.0&longitude=15.0&erupted_since=2000").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/xml"));
    assert!(body.starts_with("<Volcanoes>"));
    assert!(body.contains("<Volcano id=\"1\">"));
    assert!(body.contains("<Name>Etna</Name>"));
    assert!(body.contains("<LastErupted>2021-02-16</LastErupted>"));
    assert!(body.contains("<Country>Italy</Country>"));
    // Vesuvius last erupted in 1944 and must not qualify.
    assert!(!body.contains("Vesuvius"));
}

#[tokio::test]
async fn location_with_no_matches_returns_empty_element() {
    let router = make_test_router().await;
    let (status, _, body) =
        get(router, "/location?latitude=37.0&longitude=15.0&erupted_since=3000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<Volcanoes/>");
}

#[tokio::test]
async fn location_escapes_xml_text_content() {
    let router = make_test_router().await;
    let (status, _, body) =
        get(router, "/location?latitude=10.0&longitude=10.0&erupted_since=2000").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<Name>Smoky &amp; Peak &lt;North&gt;</Name>"));
}

#[tokio::test]
async fn location_missing_parameter_is_rejected() {
    let router = make_test_router().await;
    let (status, _, body) = get(router, "/location?latitude=37.0&longitude=15.0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid parameters");
}

#[tokio::test]
async fn location_malformed_parameter_is_rejected() {
    let router = make_test_router().await;
    let (status, _, body) =
        get(router, "/location?latitude=abc&longitude=15.0&erupted_since=2000").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid parameters");
}

// =========================================================================
// Cross-cutting
// =========================================================================

#[tokio::test]
async fn repeated_queries_produce_identical_responses() {
    let router = make_test_router().await;
    let (_, _, first) = get(router.clone(), "/year?from=1900&to=2022").await;
    let (_, _, second) = get(router, "/year?from=1900&to=2022").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let router = make_test_router().await;
    let (status, _, _) = get(router, "/volcanoes").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
