use super::common::{created_entity_response, entity_response, map_service_error, validate_input};
use crate::{errors::ApiError, handlers::AppState};
use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use validator::Validate;

const ENTITY_KEY: &str = "product_type";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductTypeRequest {
    #[validate(length(min = 1, message = "Product type name must not be empty"))]
    pub name: String,
}

/// List all product types; backs the supplier form's selection control
async fn list_product_types(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let types = state
        .services
        .product_types
        .list_product_types()
        .await
        .map_err(map_service_error)?;

    Ok(entity_response(ENTITY_KEY, types))
}

/// Create a new product type
async fn create_product_type(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductTypeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let product_type = state
        .services
        .product_types
        .create_product_type(payload.name)
        .await
        .map_err(map_service_error)?;

    Ok(created_entity_response(ENTITY_KEY, product_type))
}

/// Creates the router for product-type endpoints
pub fn product_type_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_product_types))
        .route("/", post(create_product_type))
}
