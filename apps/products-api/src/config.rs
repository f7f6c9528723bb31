//! Configuration for Products API

use core_config::{AppInfo, FromEnv, app_info, env_parse, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub environment: Environment,
    /// Create the `product` table at startup (`DB_SYNC_SCHEMA`, default true)
    pub sync_schema: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            database: PostgresConfig::from_env()?,
            environment: Environment::from_env(),
            sync_schema: env_parse("DB_SYNC_SCHEMA", "true")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars_unset(
            [
                "APP_ENV",
                "PORT",
                "HOST",
                "DATABASE_URL",
                "DB_MAX_CONNECTIONS",
                "DB_MIN_CONNECTIONS",
                "DB_SQLX_LOGGING",
                "DB_SYNC_SCHEMA",
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "products_api");
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.database, PostgresConfig::default());
                assert_eq!(config.environment, Environment::Development);
                assert!(config.sync_schema);
            },
        );
    }

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("PORT", Some("3000")),
                ("DATABASE_URL", Some("postgres://u:p@db:5432/products")),
                ("DB_SYNC_SCHEMA", Some("false")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 3000);
                assert_eq!(config.database.url, "postgres://u:p@db:5432/products");
                assert!(config.environment.is_production());
                assert!(!config.sync_schema);
            },
        );
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        temp_env::with_var("PORT", Some("not-a-port"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }
}
