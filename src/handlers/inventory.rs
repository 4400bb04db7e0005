use super::common::{
    created_entity_response, entity_response, map_service_error, pdf_response, validate_input,
};
use crate::{
    errors::ApiError,
    handlers::AppState,
    services::inventory::{InventoryItemPatch, NewInventoryItem},
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Envelope key; singular even for the collection endpoint
const ENTITY_KEY: &str = "inventory";

// Request DTOs

#[derive(Debug, Deserialize, Validate)]
pub struct CreateInventoryItemRequest {
    #[validate(length(min = 1, message = "Product name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "SKU must not be empty"))]
    pub sku: String,

    pub description: Option<String>,

    #[serde(default)]
    pub cost: Decimal,

    #[serde(default)]
    pub selling_price: Decimal,

    #[serde(default)]
    pub warranty_days: i32,

    #[serde(default)]
    pub quantity_on_hand: i32,

    #[serde(default)]
    pub reorder_level: i32,

    pub supplier_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInventoryItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost: Option<Decimal>,
    pub selling_price: Option<Decimal>,
    pub warranty_days: Option<i32>,
    pub quantity_on_hand: Option<i32>,
    pub reorder_level: Option<i32>,
    pub supplier_id: Option<Uuid>,
}

// Handler functions

/// List all inventory items
async fn list_inventory(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let items = state
        .services
        .inventory
        .list_items()
        .await
        .map_err(map_service_error)?;

    Ok(entity_response(ENTITY_KEY, items))
}

/// List items below their reorder level
async fn list_low_stock(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let items = state
        .services
        .inventory
        .list_low_stock()
        .await
        .map_err(map_service_error)?;

    Ok(entity_response(ENTITY_KEY, items))
}

/// Create a new inventory item; echoes the created document back
async fn create_inventory_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateInventoryItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let item = state
        .services
        .inventory
        .create_item(NewInventoryItem {
            name: payload.name,
            sku: payload.sku,
            description: payload.description,
            cost: payload.cost,
            selling_price: payload.selling_price,
            warranty_days: payload.warranty_days,
            quantity_on_hand: payload.quantity_on_hand,
            reorder_level: payload.reorder_level,
            supplier_id: payload.supplier_id,
        })
        .await
        .map_err(map_service_error)?;

    Ok(created_entity_response(ENTITY_KEY, item))
}

/// Get an item by SKU
async fn get_inventory_item(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state
        .services
        .inventory
        .get_item_by_sku(&sku)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("No inventory item with sku {}", sku)))?;

    Ok(entity_response(ENTITY_KEY, item))
}

/// Apply a partial update keyed by SKU and return the post-update document
async fn update_inventory_item(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    Json(payload): Json<UpdateInventoryItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let item = state
        .services
        .inventory
        .update_item_by_sku(
            &sku,
            InventoryItemPatch {
                name: payload.name,
                description: payload.description,
                cost: payload.cost,
                selling_price: payload.selling_price,
                warranty_days: payload.warranty_days,
                quantity_on_hand: payload.quantity_on_hand,
                reorder_level: payload.reorder_level,
                supplier_id: payload.supplier_id,
            },
        )
        .await
        .map_err(map_service_error)?;

    Ok(entity_response(ENTITY_KEY, item))
}

/// Delete an item by SKU
async fn delete_inventory_item(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state
        .services
        .inventory
        .delete_item_by_sku(&sku)
        .await
        .map_err(map_service_error)?;

    Ok(entity_response(ENTITY_KEY, item))
}

/// Generate the inventory report and stream it back as PDF bytes
async fn generate_report(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let bytes = state
        .services
        .reports
        .inventory_report()
        .await
        .map_err(map_service_error)?;

    Ok(pdf_response(bytes))
}

/// Creates the router for inventory endpoints
pub fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventory))
        .route("/", post(create_inventory_item))
        .route("/low-stock", get(list_low_stock))
        .route("/genRep", post(generate_report))
        .route("/:sku", get(get_inventory_item))
        .route("/:sku", patch(update_inventory_item))
        .route("/:sku", delete(delete_inventory_item))
}
