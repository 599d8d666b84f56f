//! HTTP error mapping.
//!
//! Error bodies keep the keys existing clients rely on: the single-product lookup
//! answers a miss with `{"error": ...}`, every other failure uses `{"message": ...}`.

use crate::product_actor::ProductError;
use crate::validation::ValidationError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body or failed validation (400).
    #[error("{0}")]
    BadRequest(String),

    /// `GET /api/products/:id` on an unknown id (404, `error` key).
    #[error("No product found with this ID")]
    LookupMiss,

    /// Update or delete on an unknown id (404).
    #[error("Product is not found with this ID")]
    NotFound,

    /// The product actor could not be reached (500).
    #[error("{0}")]
    Internal(String),
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => ApiError::NotFound,
            ProductError::Invalid(invalid) => invalid.into(),
            ProductError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            ApiError::LookupMiss => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Internal(_) => {
                error!(error = %message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": message })),
                )
                    .into_response()
            }
        }
    }
}
