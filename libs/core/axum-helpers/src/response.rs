use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope: `{ "data": ..., "message": "..." }`.
///
/// Pair it with a status code for anything other than 200:
///
/// ```ignore
/// (StatusCode::CREATED, ApiResponse::new(product, "Product created successfully"))
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_api_response_envelope() {
        let response = ApiResponse::new(vec![1, 2], "Numbers found").into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "data": [1, 2], "message": "Numbers found" })
        );
    }

    #[tokio::test]
    async fn test_api_response_with_status() {
        let response = (StatusCode::CREATED, ApiResponse::new("x", "created")).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
