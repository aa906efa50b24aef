//! Comercio API - REST server for categories, suppliers and products

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Connect to PostgreSQL, retrying transient startup failures
    let db = database::postgres::connect_with_retry(&config.database.url, None).await?;
    database::postgres::run_migrations::<migration::Migrator>(&db, "comercio-api").await?;

    let state = AppState { config, db };

    // Build the router: resource slices + readiness, liveness, docs
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting {} v{} on {}",
        state.config.app.name,
        state.config.app.version,
        state.config.server.address()
    );

    // Run with graceful shutdown; close the pool once in-flight requests drain
    let server_config = state.config.server.clone();
    let db_for_cleanup = state.db.clone();
    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        info!("Shutting down: closing PostgreSQL connections");
        if let Err(e) = db_for_cleanup.close().await {
            tracing::warn!("Failed to close database connection: {}", e);
        }
        info!("PostgreSQL connection closed");
    })
    .await?;

    info!("Comercio API shutdown complete");
    Ok(())
}
