//! Products API routes

use axum::Router;
use domain_products::{PgProductRepository, handlers};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = PgProductRepository::new(state.db.clone());
    handlers::router(repository)
}

/// Create the `product` table if it is missing
pub async fn sync_schema(state: &AppState) -> eyre::Result<()> {
    let repository = PgProductRepository::new(state.db.clone());
    repository.ensure_schema().await?;
    Ok(())
}
