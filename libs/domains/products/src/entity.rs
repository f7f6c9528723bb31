use crate::models::{Product, ProductInput};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;

/// SeaORM entity for the `product` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub weight: i32,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub const TAG: &'static str = "products";
}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            weight: model.weight,
            created_at: model.created_at.into(),
        }
    }
}

/// A new row: fresh UUID v4 id, `created_at` set to now.
impl From<ProductInput> for ActiveModel {
    fn from(input: ProductInput) -> Self {
        ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(input.name),
            description: Set(input.description),
            weight: Set(input.weight),
            created_at: Set(chrono::Utc::now().into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    #[test]
    fn test_active_model_from_input_generates_id() {
        let input = ProductInput {
            name: "Chair".to_string(),
            description: "Wooden chair".to_string(),
            weight: 12,
        };

        let active: ActiveModel = input.into();
        let ActiveValue::Set(id) = active.id else {
            panic!("id should be set");
        };
        assert!(Uuid::parse_str(&id).is_ok());
        assert!(matches!(active.weight, ActiveValue::Set(12)));
    }

    #[test]
    fn test_model_into_product() {
        let now = chrono::Utc::now();
        let model = Model {
            id: "abc".to_string(),
            name: "Chair".to_string(),
            description: "Wooden chair".to_string(),
            weight: 12,
            created_at: now.into(),
        };

        let product: Product = model.into();
        assert_eq!(product.id, "abc");
        assert_eq!(product.created_at, now);
    }
}
