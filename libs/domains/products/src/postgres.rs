use async_trait::async_trait;
use database::{BaseRepository, DatabaseResult, postgres::ensure_table};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, ProductInput},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Creates the `product` table if it is missing.
    pub async fn ensure_schema(&self) -> DatabaseResult<()> {
        ensure_table(self.base.db(), entity::Entity).await
    }
}

fn db_error(e: DbErr) -> ProductError {
    ProductError::Database(e.to_string())
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_one(&self, id: &str) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id.to_string()).await.map_err(db_error)?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(self.base.db()).await.map_err(db_error)?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, id: &str, input: ProductInput) -> ProductResult<Product> {
        let model = self
            .base
            .find_by_id(id.to_string())
            .await
            .map_err(db_error)?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        let mut active_model: entity::ActiveModel = model.into();
        active_model.name = Set(input.name);
        active_model.description = Set(input.description);
        active_model.weight = Set(input.weight);

        // The row can disappear between the lookup and the write.
        let updated = active_model
            .update(self.base.db())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => ProductError::NotFound(id.to_string()),
                e => db_error(e),
            })?;

        tracing::info!(product_id = %id, "Updated product");
        Ok(updated.into())
    }

    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let rows = self
            .base
            .delete_by_id(id.to_string())
            .await
            .map_err(db_error)?;

        if rows > 0 {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(rows > 0)
    }
}
