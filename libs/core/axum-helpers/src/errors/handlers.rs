use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::ErrorCode;

/// Body returned when no route matches
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteNotFound {
    pub error: String,
}

/// Router fallback: `404 {"error": "Not Found"}`.
pub async fn not_found(uri: Uri) -> Response {
    let code = ErrorCode::RouteNotFound;
    tracing::debug!(error_code = code.code(), path = %uri.path(), "No route matched");

    let body = Json(RouteNotFound {
        error: code.default_message().to_string(),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}
