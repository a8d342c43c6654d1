use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Error type for requests that reach no route.
///
/// Handlers themselves never fail; these variants only back the router
/// fallbacks so unmatched requests get a small JSON body instead of an empty one.
#[derive(Debug)]
pub enum ApiError {
    /// No route registered for the path
    NotFound,
    /// Path exists but not for this method
    MethodNotAllowed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"),
        };

        let body = Json(ErrorResponse {
            detail: detail.to_string(),
        });

        (status, body).into_response()
    }
}

pub async fn not_found_fallback() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed_fallback() -> ApiError {
    ApiError::MethodNotAllowed
}
