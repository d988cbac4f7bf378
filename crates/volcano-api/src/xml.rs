//! XML response shaping for the nearest-volcano endpoint.
//!
//! The `/location` endpoint answers with a `<Volcanoes>` document. The
//! layout is fixed wire format: one `<Volcano id="...">` element per
//! result, each holding `<Name>`, `<LastErupted>`, `<Type>`, and a
//! `<Location>` block. Serialization goes through typed structs and
//! [`quick_xml`] rather than string concatenation, so text content is
//! escaped and the document is always well formed.

use quick_xml::SeError;
use serde::Serialize;
use volcano_types::NearbyVolcano;

/// Root document for the `/location` response.
///
/// An empty result list renders as the self-closing `<Volcanoes/>`
/// element.
#[derive(Debug, Serialize)]
#[serde(rename = "Volcanoes")]
struct VolcanoesDocument {
    #[serde(rename = "Volcano")]
    volcanoes: Vec<VolcanoElement>,
}

/// One `<Volcano>` element.
#[derive(Debug, Serialize)]
struct VolcanoElement {
    #[serde(rename = "@id")]
    id: i64,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "LastErupted")]
    last_erupted: String,
    #[serde(rename = "Type")]
    volcano_type: String,
    #[serde(rename = "Location")]
    location: LocationElement,
}

/// The `<Location>` block nested in each `<Volcano>`.
#[derive(Debug, Serialize)]
struct LocationElement {
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Elevation")]
    elevation: i64,
    #[serde(rename = "Country")]
    country: String,
}

impl From<&NearbyVolcano> for VolcanoElement {
    fn from(volcano: &NearbyVolcano) -> Self {
        Self {
            id: volcano.id.into_inner(),
            name: volcano.name.clone(),
            last_erupted: volcano.last_erupted.clone(),
            volcano_type: volcano.volcano_type.clone(),
            location: LocationElement {
                latitude: volcano.location.latitude,
                longitude: volcano.location.longitude,
                elevation: volcano.location.elevation,
                country: volcano.location.country.clone(),
            },
        }
    }
}

/// Render the ranked volcano list as the `<Volcanoes>` XML document.
///
/// # Errors
///
/// Returns [`SeError`] if serialization fails.
pub fn render_volcanoes(volcanoes: &[NearbyVolcano]) -> Result<String, SeError> {
    let document = VolcanoesDocument {
        volcanoes: volcanoes.iter().map(VolcanoElement::from).collect(),
    };
    quick_xml::se::to_string(&document)
}
