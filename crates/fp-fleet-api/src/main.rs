//! FleetPulse vehicle operations API — fleet management REST server.
//!
//! Serves vehicle CRUD, live-fleet queries, vehicle history, and bulk
//! CSV import/export over a pluggable vehicle store (PostgreSQL in
//! production, in-memory for development).

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use fp_fleet_api::config::ApiConfig;
use fp_fleet_api::routes::build_router;
use fp_fleet_api::state::AppState;
use fp_fleet_api::store::postgres::PgVehicleStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "fp-fleet-api starting");

    let config = ApiConfig::from_env();

    let state = if let Some(database_url) = &config.database_url {
        tracing::info!("connecting to PostgreSQL");
        let store = PgVehicleStore::connect(database_url).await?;
        AppState::with_store(Arc::new(store))
    } else {
        tracing::warn!("DATABASE_URL not set — using in-memory store with sample fleet");
        AppState::with_sample_fleet()
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
