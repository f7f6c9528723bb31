use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ApiResponse, AppError, ErrorResponse, FieldViolation, ValidatedJson,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
        UnprocessableEntityResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::ProductError;
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;

/// Response messages
pub mod messages {
    pub const LIST: &str = "Products found successfully";
    pub const CREATED: &str = "Product created successfully";
    pub const FOUND: &str = "Product found successfully";
    pub const UPDATED: &str = "Product updated successfully";
    pub const NOT_FOUND: &str = "Product not found";
    pub const DELETE_FAILED: &str = "Failed to delete product";
}

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductInput, ErrorResponse, FieldViolation),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Product routes, to be nested by the application (e.g. under `/api`).
///
/// The collection answers on both `/products` and `/products/`.
pub fn router<R: ProductRepository + 'static>(repository: R) -> Router {
    let shared_repository = Arc::new(repository);

    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_repository)
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "Products found successfully", body = ApiResponse<Vec<Product>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(repository): State<Arc<R>>,
) -> Result<ApiResponse<Vec<Product>>, AppError> {
    let products = repository.get_all().await?;
    Ok(ApiResponse::new(products, messages::LIST))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = entity::Model::TAG,
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created successfully", body = ApiResponse<Product>),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(repository): State<Arc<R>>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> Result<impl IntoResponse, AppError> {
    let product = repository.create(input).await?;
    Ok((StatusCode::CREATED, ApiResponse::new(product, messages::CREATED)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found successfully", body = ApiResponse<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(repository): State<Arc<R>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Product>, AppError> {
    let product = repository
        .find_one(&id)
        .await?
        .ok_or(ProductError::NotFound(id))?;
    Ok(ApiResponse::new(product, messages::FOUND))
}

/// Replace a product's name, description and weight
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated successfully", body = ApiResponse<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(repository): State<Arc<R>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> Result<ApiResponse<Product>, AppError> {
    let product = repository.update(&id, input).await?;
    Ok(ApiResponse::new(product, messages::UPDATED))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(repository): State<Arc<R>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    match repository.delete(&id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(ProductError::NotFound(id).into()),
        Err(e) => {
            tracing::error!(product_id = %id, error = %e, "Failed to delete product");
            Err(AppError::BadRequest(messages::DELETE_FAILED.to_string()))
        }
    }
}
