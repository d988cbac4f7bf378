//! Joined query-result records served by the API.
//!
//! These are the wire shapes for the list endpoints: the field order and
//! serde names here define the JSON layout, so changes are breaking for
//! API consumers.

use serde::{Deserialize, Serialize};

use crate::ids::VolcanoId;

/// Location block shared by eruption and nearby-volcano records.
///
/// Nullable dataset columns are defaulted at the row-mapping boundary:
/// coordinates to `0.0`, elevation to `0`, country to the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Latitude of the volcano, decimal degrees.
    pub latitude: f64,
    /// Longitude of the volcano, decimal degrees.
    pub longitude: f64,
    /// Elevation above sea level, metres.
    pub elevation: i64,
    /// Country the volcano is located in.
    pub country: String,
}

/// A joined eruption+volcano row returned by the year-range query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EruptionRecord {
    /// Eruption date as stored (free text, year in the first four characters).
    pub date: String,
    /// Name of the erupting volcano.
    pub name: String,
    /// Where the volcano is.
    pub location: Place,
    /// Recorded deaths, zero when unknown.
    pub deaths: i64,
    /// Recorded missing persons, zero when unknown.
    pub missing: i64,
    /// Recorded injuries, zero when unknown.
    pub injuries: i64,
}

/// A volcano ranked by the nearest-location query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyVolcano {
    /// Dataset identifier of the volcano.
    pub id: VolcanoId,
    /// Name of the volcano.
    pub name: String,
    /// Most recent qualifying eruption date (max over the volcano's
    /// eruptions at or after the requested year).
    #[serde(rename = "lastErupted")]
    pub last_erupted: String,
    /// Volcano type classification (e.g. stratovolcano).
    #[serde(rename = "type")]
    pub volcano_type: String,
    /// Where the volcano is.
    pub location: Place,
}
