use crate::errors::{ApiError, ServiceError};
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use validator::Validate;

/// Standard success response wrapping the payload under the entity's key.
/// Collection endpoints use the same singular key as item endpoints.
pub fn entity_response<T: Serialize>(key: &str, data: T) -> Response {
    (StatusCode::OK, Json(json!({ key: data }))).into_response()
}

/// Standard created response with the same envelope shape
pub fn created_entity_response<T: Serialize>(key: &str, data: T) -> Response {
    (StatusCode::CREATED, Json(json!({ key: data }))).into_response()
}

/// A generated report streamed back as PDF bytes
pub fn pdf_response(bytes: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/pdf")],
        bytes,
    )
        .into_response()
}

/// Validate request input
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::ValidationError(format!("Validation failed: {}", e)))
}

/// Map service errors to API errors
pub fn map_service_error(err: ServiceError) -> ApiError {
    ApiError::ServiceError(err)
}
