use axum_helpers::AppError;
use thiserror::Error;

use crate::handlers::messages;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(messages::NOT_FOUND.to_string()),
            ProductError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}
