//! Query operations over the `volcanoes` and `eruptions` tables.
//!
//! Every operation runs one parameterized query against a pooled
//! connection and maps raw rows into the shared record types. Nullable
//! dataset columns are defaulted here, at the row-mapping boundary, so
//! the rest of the service never sees an absent field.

use sqlx::SqlitePool;
use volcano_types::{EruptionRecord, NearbyVolcano, Place, VolcanoId};

use crate::error::DbError;

/// Maximum number of volcanoes returned by the nearest-location query.
const NEAREST_LIMIT: i64 = 10;

/// Operations on the volcano eruption dataset.
pub struct VolcanoStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> VolcanoStore<'a> {
    /// Create a new store bound to a connection pool.
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Count all volcano rows in the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn count_volcanoes(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM volcanoes")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Count all eruption rows in the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn count_eruptions(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM eruptions")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Count volcanoes whose country matches `country` exactly.
    ///
    /// The match is case-sensitive, as stored. Zero matches is an
    /// ordinary `Ok(0)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn count_in_country(&self, country: &str) -> Result<i64, DbError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM volcanoes WHERE Country = ?1")
                .bind(country)
                .fetch_one(self.pool)
                .await?;
        Ok(count)
    }

    /// Fetch eruptions whose year falls within `[from_year, to_year]`,
    /// both bounds inclusive.
    ///
    /// The year is the integer cast of the first four characters of the
    /// stored date text. Results are joined with the owning volcano and
    /// ordered ascending by the raw date string. An empty match is an
    /// ordinary `Ok` with an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn eruptions_in_year_range(
        &self,
        from_year: i32,
        to_year: i32,
    ) -> Result<Vec<EruptionRecord>, DbError> {
        let rows = sqlx::query_as::<_, EruptionRow>(
            r"SELECT e.Date AS date, v.Name AS name,
                     v.Latitude AS latitude, v.Longitude AS longitude,
                     v.Elevation AS elevation, v.Country AS country,
                     e.Deaths AS deaths, e.Missing AS missing, e.Injuries AS injuries
              FROM eruptions e
              INNER JOIN volcanoes v ON e.Volcano_ID = v.ID
              WHERE CAST(substr(e.Date, 1, 4) AS INTEGER) >= ?1
                AND CAST(substr(e.Date, 1, 4) AS INTEGER) <= ?2
              ORDER BY e.Date ASC",
        )
        .bind(from_year)
        .bind(to_year)
        .fetch_all(self.pool)
        .await?;

        tracing::debug!(
            count = rows.len(),
            from_year,
            to_year,
            "Fetched eruptions in year range"
        );
        Ok(rows.into_iter().map(EruptionRecord::from).collect())
    }

    /// Rank volcanoes by proximity to a query point, nearest first.
    ///
    /// Only volcanoes with at least one eruption whose year is at or
    /// after `erupted_since` qualify; each carries the most recent date
    /// among those qualifying eruptions. At most
    /// 10 rows are returned.
    ///
    /// Ordering uses a planar approximation of angular distance:
    ///
    /// ```text
    /// (qlat - Latitude)^2 + cos(radians(qlat)) * (qlon - Longitude)^2
    /// ```
    ///
    /// with the query latitude in both the delta term and the cosine
    /// weight. Consumers of the dataset depend on this exact ordering;
    /// it must not be replaced with a great-circle distance.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn nearest_volcanoes(
        &self,
        latitude: f64,
        longitude: f64,
        erupted_since: i32,
    ) -> Result<Vec<NearbyVolcano>, DbError> {
        // The cosine weight is evaluated host-side and bound as a plain
        // parameter, so the SQL needs no math functions.
        let cos_weight = latitude.to_radians().cos();

        let rows = sqlx::query_as::<_, NearbyRow>(
            r"SELECT v.ID AS id, v.Name AS name, MAX(e.Date) AS last_erupted,
                     v.Type AS volcano_type,
                     v.Latitude AS latitude, v.Longitude AS longitude,
                     v.Elevation AS elevation, v.Country AS country
              FROM eruptions e
              INNER JOIN volcanoes v ON e.Volcano_ID = v.ID
              WHERE CAST(substr(e.Date, 1, 4) AS INTEGER) >= ?1
              GROUP BY v.ID
              ORDER BY ((?2 - v.Latitude) * (?2 - v.Latitude))
                     + (?4 * ((?3 - v.Longitude) * (?3 - v.Longitude))) ASC
              LIMIT ?5",
        )
        .bind(erupted_since)
        .bind(latitude)
        .bind(longitude)
        .bind(cos_weight)
        .bind(NEAREST_LIMIT)
        .fetch_all(self.pool)
        .await?;

        tracing::debug!(
            count = rows.len(),
            latitude,
            longitude,
            erupted_since,
            "Ranked volcanoes by proximity"
        );
        Ok(rows.into_iter().map(NearbyVolcano::from).collect())
    }
}

/// Raw joined row for the year-range query.
#[derive(Debug, sqlx::FromRow)]
struct EruptionRow {
    date: Option<String>,
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    elevation: Option<i64>,
    country: Option<String>,
    deaths: Option<i64>,
    missing: Option<i64>,
    injuries: Option<i64>,
}

impl From<EruptionRow> for EruptionRecord {
    fn from(row: EruptionRow) -> Self {
        Self {
            date: row.date.unwrap_or_default(),
            name: row.name.unwrap_or_default(),
            location: Place {
                latitude: row.latitude.unwrap_or(0.0),
                longitude: row.longitude.unwrap_or(0.0),
                elevation: row.elevation.unwrap_or(0),
                country: row.country.unwrap_or_default(),
            },
            deaths: row.deaths.unwrap_or(0),
            missing: row.missing.unwrap_or(0),
            injuries: row.injuries.unwrap_or(0),
        }
    }
}

/// Raw grouped row for the nearest-location query.
#[derive(Debug, sqlx::FromRow)]
struct NearbyRow {
    id: i64,
    name: Option<String>,
    last_erupted: Option<String>,
    volcano_type: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    elevation: Option<i64>,
    country: Option<String>,
}

impl From<NearbyRow> for NearbyVolcano {
    fn from(row: NearbyRow) -> Self {
        Self {
            id: VolcanoId::from(row.id),
            name: row.name.unwrap_or_default(),
            last_erupted: row.last_erupted.unwrap_or_default(),
            volcano_type: row.volcano_type.unwrap_or_default(),
            location: Place {
                latitude: row.latitude.unwrap_or(0.0),
                longitude: row.longitude.unwrap_or(0.0),
                elevation: row.elevation.unwrap_or(0),
                country: row.country.unwrap_or_default(),
            },
        }
    }
}
