//! Volcano query service binary.
//!
//! This is the entry point that wires together configuration, the
//! `SQLite` dataset pool, and the Axum query API. It loads configuration,
//! opens the dataset, and serves requests until the process is
//! terminated.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `volcano-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Open the dataset connection pool (fail fast if unreachable)
//! 4. Assemble shared application state
//! 5. Serve HTTP until terminated

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;
use volcano_api::server::{ServerConfig, start_server};
use volcano_api::state::AppState;
use volcano_db::dataset::{DatasetConfig, DatasetPool};

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Application entry point for the volcano query service.
///
/// # Errors
///
/// Returns an error if configuration loading, dataset opening, or the
/// HTTP server fails. Request-time database faults do not end up here;
/// they are mapped to per-request 500 responses by the API layer.
#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the config
    //    file's level when set.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with_target(true)
        .init();

    info!("volcano-service starting");
    info!(
        host = config.server.host,
        port = config.server.port,
        database = config.database.path,
        "Configuration loaded"
    );

    // 3. Open the dataset pool. The dataset is the service's only
    //    dependency, so an unreachable file aborts startup.
    let dataset_config = DatasetConfig::new(&config.database.path)
        .with_max_connections(config.database.max_connections);
    let pool = DatasetPool::connect(&dataset_config).await?;

    // 4. Assemble shared application state.
    let state = Arc::new(AppState::new(pool));

    // 5. Serve until terminated.
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}

/// Load the service configuration from `volcano-config.yaml`.
///
/// Looks for the config file relative to the current working directory;
/// falls back to defaults (with environment overrides) when absent.
fn load_config() -> Result<ServiceConfig, ServiceError> {
    let config_path = Path::new("volcano-config.yaml");
    if config_path.exists() {
        let config = ServiceConfig::from_file(config_path)?;
        Ok(config)
    } else {
        Ok(ServiceConfig::from_env())
    }
}
