//! Products API - REST server

use axum_helpers::server::{close_postgres, create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::connect_from_config_with_retry;
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

    info!("Connecting to PostgreSQL at {}", config.database.redacted_url());
    let db = connect_from_config_with_retry(config.database.clone(), None).await?;

    let state = AppState {
        config: config.clone(),
        db,
    };

    if config.sync_schema {
        api::sync_schema(&state).await?;
    } else {
        info!("Schema synchronisation disabled (DB_SYNC_SCHEMA=false)");
    }

    let router = create_router::<openapi::ApiDoc>(api::routes(&state), api::root_routes(&state))?;

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    let db = state.db.clone();
    create_production_app(router, &config.server, Duration::from_secs(30), async move {
        close_postgres(db, "products").await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
