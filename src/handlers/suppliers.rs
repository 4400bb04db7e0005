use super::common::{
    created_entity_response, entity_response, map_service_error, pdf_response, validate_input,
};
use crate::{
    errors::ApiError,
    handlers::AppState,
    services::suppliers::{NewSupplier, SupplierPatch},
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Envelope key; singular even for the collection endpoint
const ENTITY_KEY: &str = "supplier";

// Request DTOs

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSupplierRequest {
    #[validate(length(min = 1, message = "Supplier name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Phone must not be empty"))]
    pub phone: String,

    pub email: String,
    pub address: String,

    #[serde(default)]
    pub offered_product_type_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSupplierRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub offered_product_type_ids: Option<Vec<Uuid>>,
}

// Handler functions

/// List all suppliers
async fn list_suppliers(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let suppliers = state
        .services
        .suppliers
        .list_suppliers()
        .await
        .map_err(map_service_error)?;

    Ok(entity_response(ENTITY_KEY, suppliers))
}

/// Create a new supplier; echoes the created document back
async fn create_supplier(
    State(state): State<AppState>,
    Json(payload): Json<CreateSupplierRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let supplier = state
        .services
        .suppliers
        .create_supplier(NewSupplier {
            name: payload.name,
            phone: payload.phone,
            email: payload.email,
            address: payload.address,
            offered_product_type_ids: payload.offered_product_type_ids,
        })
        .await
        .map_err(map_service_error)?;

    Ok(created_entity_response(ENTITY_KEY, supplier))
}

/// Get a supplier by ID
async fn get_supplier(
    State(state): State<AppState>,
    Path(supplier_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let supplier = state
        .services
        .suppliers
        .get_supplier(&supplier_id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("No supplier with id {}", supplier_id)))?;

    Ok(entity_response(ENTITY_KEY, supplier))
}

/// Apply a partial update and return the post-update document
async fn update_supplier(
    State(state): State<AppState>,
    Path(supplier_id): Path<Uuid>,
    Json(payload): Json<UpdateSupplierRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let supplier = state
        .services
        .suppliers
        .update_supplier(
            &supplier_id,
            SupplierPatch {
                name: payload.name,
                phone: payload.phone,
                email: payload.email,
                address: payload.address,
                offered_product_type_ids: payload.offered_product_type_ids,
            },
        )
        .await
        .map_err(map_service_error)?;

    Ok(entity_response(ENTITY_KEY, supplier))
}

/// Delete a supplier by surrogate id
async fn delete_supplier(
    State(state): State<AppState>,
    Path(supplier_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let supplier = state
        .services
        .suppliers
        .delete_supplier(&supplier_id)
        .await
        .map_err(map_service_error)?;

    Ok(entity_response(ENTITY_KEY, supplier))
}

/// Delete a supplier by phone number, the dashboard's natural key.
/// Deliberately a separate route from the id-keyed delete.
async fn delete_supplier_by_phone(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let supplier = state
        .services
        .suppliers
        .delete_supplier_by_phone(&phone)
        .await
        .map_err(map_service_error)?;

    Ok(entity_response(ENTITY_KEY, supplier))
}

/// Generate the supplier report and stream it back as PDF bytes
async fn generate_report(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let bytes = state
        .services
        .reports
        .supplier_report()
        .await
        .map_err(map_service_error)?;

    Ok(pdf_response(bytes))
}

/// Creates the router for supplier endpoints
pub fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suppliers))
        .route("/", post(create_supplier))
        .route("/genRep", post(generate_report))
        .route("/by-phone/:phone", delete(delete_supplier_by_phone))
        .route("/:id", get(get_supplier))
        .route("/:id", axum::routing::patch(update_supplier))
        .route("/:id", delete(delete_supplier))
}
