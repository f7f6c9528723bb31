//! API routes module

pub mod health;
pub mod products;

use axum::{Json, Router, routing::get};
use axum_helpers::server::health_router;
use serde_json::{Value, json};

use crate::state::AppState;

/// Routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    products::router(state)
}

/// Routes served from the root: `/`, `/health`, `/ready`
pub fn root_routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone()))
}

/// Create missing tables
pub async fn sync_schema(state: &AppState) -> eyre::Result<()> {
    products::sync_schema(state).await
}

async fn root() -> Json<Value> {
    Json(json!({ "success": true }))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::{Config, Environment};
    use crate::state::AppState;
    use core_config::{app_info, server::ServerConfig};
    use database::postgres::{DatabaseConnection, PostgresConfig};

    pub fn state(db: DatabaseConnection) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                server: ServerConfig::default(),
                database: PostgresConfig::default(),
                environment: Environment::Development,
                sync_schema: false,
            },
            db,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum_helpers::server::create_router;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_root_returns_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let app = root_routes(&test_support::state(db));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "success": true }));
    }

    fn product_row(id: &str, name: &str) -> domain_products::entity::Model {
        domain_products::entity::Model {
            id: id.to_string(),
            name: name.to_string(),
            description: "Wooden chair".to_string(),
            weight: 12,
            created_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_products_served_under_api_prefix() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![product_row("a", "Chair"), product_row("b", "Lamp")],
                vec![],
            ])
            .into_connection();
        let state = test_support::state(db);
        let app = temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            create_router::<ApiDoc>(routes(&state), root_routes(&state))
        })
        .unwrap();

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/products/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Products found successfully");
        assert_eq!(body["data"][0]["id"], "a");
        assert_eq!(body["data"][1]["name"], "Lamp");

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/products/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(Request::builder().uri("/products").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Not Found" }));
    }
}
