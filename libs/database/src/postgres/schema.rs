use sea_orm::{ConnectionTrait, DatabaseConnection, EntityName, EntityTrait, Schema};
use tracing::info;

use crate::common::{DatabaseError, DatabaseResult};

/// Creates the table behind `entity` when it does not exist yet.
///
/// Column types and defaults come from the entity definition. Existing
/// tables are left untouched; this is startup synchronisation, not a
/// migration system.
pub async fn ensure_table<E>(db: &DatabaseConnection, entity: E) -> DatabaseResult<()>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let table = entity.table_name().to_string();

    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute_raw(backend.build(&statement))
        .await
        .map_err(|e| DatabaseError::SchemaSync {
            table: table.clone(),
            details: e.to_string(),
        })?;

    info!(table = %table, "Table schema synchronised");
    Ok(())
}
