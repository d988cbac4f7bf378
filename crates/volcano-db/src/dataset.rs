//! `SQLite` connection pool for the volcano dataset.
//!
//! The dataset is a pre-loaded `SQLite` file holding the `volcanoes` and
//! `eruptions` tables. The service only ever reads from it.
//!
//! Uses [`sqlx`] with runtime query construction (not compile-time
//! checked) so builds do not require the dataset to be present. All
//! queries are parameterized to prevent SQL injection.

use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::DbError;

/// Default maximum number of connections in the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default connection acquire timeout in seconds.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Default idle timeout in seconds.
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 300;

/// Configuration for the `SQLite` connection pool.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Filesystem path of the `SQLite` database file.
    pub path: String,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
    /// Timeout for acquiring a connection from the pool.
    pub acquire_timeout: Duration,
    /// Idle connection timeout.
    pub idle_timeout: Duration,
}

impl DatasetConfig {
    /// Create a new configuration from a database file path.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_owned(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
        }
    }

    /// Set the maximum number of connections.
    #[must_use]
    pub const fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Set the connection acquire timeout.
    #[must_use]
    pub const fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub const fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }
}

/// Connection pool handle to the volcano dataset.
///
/// Wraps a [`sqlx::SqlitePool`] and provides access to the query
/// operations in [`VolcanoStore`](crate::volcano_store::VolcanoStore).
/// Each query acquires a pooled connection scoped to its own lifetime,
/// released on every exit path; the pool itself is closed once at
/// process shutdown.
#[derive(Clone)]
pub struct DatasetPool {
    pool: sqlx::SqlitePool,
}

impl DatasetPool {
    /// Open the dataset using the provided configuration.
    ///
    /// The database file must already exist; this never creates one.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Config`] if the configured path is blank or
    /// the pool is sized to zero connections, and [`DbError::Sqlite`]
    /// if the file cannot be opened.
    pub async fn connect(config: &DatasetConfig) -> Result<Self, DbError> {
        if config.path.trim().is_empty() {
            return Err(DbError::Config(String::from("dataset path is empty")));
        }
        if config.max_connections == 0 {
            return Err(DbError::Config(String::from(
                "max_connections must be at least 1",
            )));
        }

        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(config.idle_timeout)
            .connect_with(options)
            .await?;

        tracing::info!(
            path = %config.path,
            max_connections = config.max_connections,
            "Opened volcano dataset"
        );

        Ok(Self { pool })
    }

    /// Open the dataset at a file path with default pool settings.
    ///
    /// Convenience wrapper around [`DatasetPool::connect`] with
    /// [`DatasetConfig::new`].
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the file cannot be opened.
    pub async fn connect_path(path: &str) -> Result<Self, DbError> {
        let config = DatasetConfig::new(path);
        Self::connect(&config).await
    }

    /// Open a fresh in-memory database for tests.
    ///
    /// An in-memory `SQLite` database lives and dies with its connection,
    /// so the pool is pinned to a single connection that is never reaped.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the connection fails.
    pub async fn connect_in_memory() -> Result<Self, DbError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self { pool })
    }

    /// Run all pending migrations from the `migrations/` directory.
    ///
    /// Production datasets ship pre-loaded; this exists for tests and
    /// fresh environments.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Migration`] if any migration fails.
    pub async fn run_migrations(&self) -> Result<(), DbError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations completed");
        Ok(())
    }

    /// Return a reference to the underlying [`sqlx::SqlitePool`].
    pub const fn pool(&self) -> &sqlx::SqlitePool {
        &self.pool
    }

    /// Close all connections in the pool gracefully.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("SQLite pool closed");
    }
}
