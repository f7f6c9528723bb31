use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};

/// Persistence for products.
///
/// Inputs reaching a repository have already passed validation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in insertion order
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// `None` when no product has this id
    async fn find_one(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Stores a new product with a generated id and timestamp
    async fn create(&self, input: ProductInput) -> ProductResult<Product>;

    /// Overwrites name, description and weight.
    ///
    /// Fails with [`ProductError::NotFound`] when the id is unknown.
    async fn update(&self, id: &str, input: ProductInput) -> ProductResult<Product>;

    /// Returns `false` when nothing was removed
    async fn delete(&self, id: &str) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn find_one(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let product = Product::new(input);
        self.products.write().await.push(product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: &str, input: ProductInput) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        product.apply_update(input);

        tracing::info!(product_id = %id, "Updated product");
        Ok(product.clone())
    }

    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                products.remove(index);
                tracing::info!(product_id = %id, "Deleted product");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
