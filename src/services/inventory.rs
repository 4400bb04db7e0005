use crate::{db::DbPool, entities::inventory_item, errors::ServiceError};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Input for creating an inventory item
#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub cost: Decimal,
    pub selling_price: Decimal,
    pub warranty_days: i32,
    pub quantity_on_hand: i32,
    pub reorder_level: i32,
    pub supplier_id: Option<Uuid>,
}

/// Partial update applied to an existing inventory item
#[derive(Debug, Clone, Default)]
pub struct InventoryItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost: Option<Decimal>,
    pub selling_price: Option<Decimal>,
    pub warranty_days: Option<i32>,
    pub quantity_on_hand: Option<i32>,
    pub reorder_level: Option<i32>,
    pub supplier_id: Option<Uuid>,
}

/// Service for managing inventory items
#[derive(Clone)]
pub struct InventoryService {
    db_pool: Arc<DbPool>,
}

impl InventoryService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Creates a new inventory item
    #[instrument(skip(self))]
    pub async fn create_item(
        &self,
        input: NewInventoryItem,
    ) -> Result<inventory_item::Model, ServiceError> {
        let db = &*self.db_pool;

        let model = inventory_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            sku: Set(input.sku),
            description: Set(input.description),
            cost: Set(input.cost),
            selling_price: Set(input.selling_price),
            warranty_days: Set(input.warranty_days),
            quantity_on_hand: Set(input.quantity_on_hand),
            reorder_level: Set(input.reorder_level),
            supplier_id: Set(input.supplier_id),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!("Inventory item created: {} ({})", model.id, model.sku);
        Ok(model)
    }

    /// Gets an item by SKU, the natural key the dashboard uses
    #[instrument(skip(self))]
    pub async fn get_item_by_sku(
        &self,
        sku: &str,
    ) -> Result<Option<inventory_item::Model>, ServiceError> {
        let db = &*self.db_pool;
        let item = inventory_item::Entity::find()
            .filter(inventory_item::Column::Sku.eq(sku))
            .one(db)
            .await?;
        Ok(item)
    }

    /// Lists all inventory items
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<inventory_item::Model>, ServiceError> {
        let db = &*self.db_pool;
        let items = inventory_item::Entity::find()
            .order_by_asc(inventory_item::Column::Name)
            .all(db)
            .await?;
        Ok(items)
    }

    /// Lists items whose on-hand quantity is below their reorder level
    #[instrument(skip(self))]
    pub async fn list_low_stock(&self) -> Result<Vec<inventory_item::Model>, ServiceError> {
        // The comparison is between two columns of the same row, which the
        // query builder does not express directly; filter in memory instead.
        let items = self.list_items().await?;
        Ok(items.into_iter().filter(|i| i.is_low_stock()).collect())
    }

    /// Applies a partial update keyed by SKU and returns the post-update document
    #[instrument(skip(self))]
    pub async fn update_item_by_sku(
        &self,
        sku: &str,
        patch: InventoryItemPatch,
    ) -> Result<inventory_item::Model, ServiceError> {
        let db = &*self.db_pool;

        let existing = self
            .get_item_by_sku(sku)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No inventory item with sku {}", sku)))?;

        let mut active: inventory_item::ActiveModel = existing.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(description) = patch.description {
            active.description = Set(Some(description));
        }
        if let Some(cost) = patch.cost {
            active.cost = Set(cost);
        }
        if let Some(selling_price) = patch.selling_price {
            active.selling_price = Set(selling_price);
        }
        if let Some(warranty_days) = patch.warranty_days {
            active.warranty_days = Set(warranty_days);
        }
        if let Some(quantity) = patch.quantity_on_hand {
            active.quantity_on_hand = Set(quantity);
        }
        if let Some(reorder_level) = patch.reorder_level {
            active.reorder_level = Set(reorder_level);
        }
        if let Some(supplier_id) = patch.supplier_id {
            active.supplier_id = Set(Some(supplier_id));
        }

        let updated = active.update(db).await?;

        info!("Inventory item updated: {} ({})", updated.id, updated.sku);
        Ok(updated)
    }

    /// Deletes an item by SKU and returns the removed document
    #[instrument(skip(self))]
    pub async fn delete_item_by_sku(
        &self,
        sku: &str,
    ) -> Result<inventory_item::Model, ServiceError> {
        let db = &*self.db_pool;

        let existing = self
            .get_item_by_sku(sku)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No inventory item with sku {}", sku)))?;

        let removed = existing.clone();
        existing.delete(db).await?;

        info!("Inventory item deleted: {} ({})", removed.id, removed.sku);
        Ok(removed)
    }
}
