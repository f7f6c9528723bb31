//! PostgreSQL connection management, schema synchronisation and health checks.

mod config;
mod connector;
mod health;
mod schema;

pub use config::{DEFAULT_DATABASE_URL, PostgresConfig};
pub use connector::{connect_from_config, connect_from_config_with_retry};
pub use health::check_health;
pub use schema::ensure_table;

pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
