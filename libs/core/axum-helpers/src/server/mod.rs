//! Server infrastructure: router assembly with API docs, health endpoints,
//! graceful shutdown and connection cleanup.
//!
//! ```ignore
//! use axum_helpers::server::{close_postgres, create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let root = Router::new().merge(health_router(app_info!()));
//! let router = create_router::<ApiDoc>(api_routes, root)?;
//!
//! create_production_app(router, &config.server, Duration::from_secs(30), async move {
//!     close_postgres(db, "products").await;
//! })
//! .await?;
//! ```

pub mod app;
pub mod cleanup;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use cleanup::close_postgres;
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
