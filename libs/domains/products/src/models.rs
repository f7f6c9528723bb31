use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A stored product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// UUID v4 assigned at creation
    #[schema(example = "5f0c8f2e-8a4b-4c8e-9c1e-2f6d1b7a3e90")]
    pub id: String,
    #[schema(example = "Chair")]
    pub name: String,
    #[schema(example = "Wooden chair")]
    pub description: String,
    #[schema(example = 12)]
    pub weight: i32,
    /// Set once on insert
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(input: ProductInput) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            weight: input.weight,
            created_at: Utc::now(),
        }
    }

    /// Replaces the business fields; `id` and `created_at` are kept.
    pub fn apply_update(&mut self, input: ProductInput) {
        self.name = input.name;
        self.description = input.description;
        self.weight = input.weight;
    }
}

/// Request body for both create and update
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    #[validate(length(min = 3, max = 100, message = "name must be between 3 and 100 characters"))]
    #[schema(example = "Chair", min_length = 3, max_length = 100)]
    pub name: String,

    #[validate(length(
        min = 3,
        max = 100,
        message = "description must be between 3 and 100 characters"
    ))]
    #[schema(example = "Wooden chair", min_length = 3, max_length = 100)]
    pub description: String,

    #[validate(range(min = 3, max = 100, message = "weight must be between 3 and 100"))]
    #[schema(example = 12, minimum = 3, maximum = 100)]
    pub weight: i32,
}
