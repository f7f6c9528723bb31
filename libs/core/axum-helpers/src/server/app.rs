use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors::cors_layer_from_env, security::security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Assembles the application router.
///
/// - `apis` is nested under `/api`
/// - `root` is merged as-is (`/`, `/health`, `/ready`, ...)
/// - Swagger UI at `/api-docs` serving `/openapi.json`, ReDoc at `/redoc`,
///   RapiDoc at `/rapidoc`, Scalar at `/scalar`
/// - unmatched paths fall back to `404 {"error": "Not Found"}`
/// - layers: tracing, security headers, CORS (see [`cors_layer_from_env`]),
///   compression
///
/// Both routers must already have their state applied.
///
/// # Errors
/// Fails when `CORS_ALLOWED_ORIGIN` holds a value that is not a valid header.
///
/// ```ignore
/// let api_routes = Router::new().nest("/", domain_products::router(repository));
/// let root = Router::new().route("/", get(root_handler));
/// let router = create_router::<ApiDoc>(api_routes, root)?;
/// ```
pub fn create_router<T>(apis: Router, root: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = cors_layer_from_env()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/api-docs").url("/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .merge(root)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Binds `server_config.address()` and serves `router` until SIGINT/SIGTERM.
///
/// After the signal the server stops accepting connections and drains
/// in-flight requests while `cleanup` runs, bounded by `shutdown_timeout`.
///
/// ```ignore
/// create_production_app(
///     router,
///     &config.server,
///     Duration::from_secs(30),
///     async move { close_postgres(db, "products").await },
/// )
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::default();
    let signal_handle = coordinator.clone();
    let cleanup_trigger = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        cleanup_trigger.wait().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal_handle.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // a serve error skips the signal path, make sure cleanup still runs
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json,
        body::Body,
        http::{Request, StatusCode},
        response::Response,
        routing::get,
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "Test API", version = "0.0.1"))]
    struct TestDoc;

    fn app() -> Router {
        let apis = Router::new().route("/items", get(|| async { Json(json!({ "items": [] })) }));
        let root = Router::new().route("/", get(|| async { Json(json!({ "success": true })) }));

        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            create_router::<TestDoc>(apis, root).unwrap()
        })
    }

    async fn get_path(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_api_routes_are_nested() {
        let response = get_path(app(), "/api/items").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get_path(app(), "/items").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_router_is_merged() {
        let response = get_path(app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "success": true }));
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back_to_404() {
        let response = get_path(app(), "/does/not/exist").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["x-frame-options"], "DENY");
        assert_eq!(json_body(response).await, json!({ "error": "Not Found" }));
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = get_path(app(), "/openapi.json").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["info"]["title"], "Test API");
    }

    #[test]
    fn test_invalid_cors_origin_fails() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("http://bad\norigin"), || {
            let result = create_router::<TestDoc>(Router::new(), Router::new());
            assert!(result.is_err());
        });
    }
}
