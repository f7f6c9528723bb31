/// Error type for connection management and health probes.
///
/// Query errors inside repositories stay as `sea_orm::DbErr` and are mapped by
/// the owning domain crate.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Schema synchronisation failed at startup
    #[error("Schema sync failed for '{table}': {details}")]
    SchemaSync { table: String, details: String },
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
