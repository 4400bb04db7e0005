use crate::{
    db::DbPool,
    entities::{product_type, supplier, supplier_product_type},
    errors::ServiceError,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Input for creating a supplier
#[derive(Debug, Clone)]
pub struct NewSupplier {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub offered_product_type_ids: Vec<Uuid>,
}

/// Partial update applied to an existing supplier
#[derive(Debug, Clone, Default)]
pub struct SupplierPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub offered_product_type_ids: Option<Vec<Uuid>>,
}

/// A supplier together with its resolved offered product types
#[derive(Debug, Clone, serde::Serialize)]
pub struct SupplierWithProductTypes {
    #[serde(flatten)]
    pub supplier: supplier::Model,
    pub offered_product_types: Vec<product_type::Model>,
}

/// Service for managing suppliers
#[derive(Clone)]
pub struct SupplierService {
    db_pool: Arc<DbPool>,
}

impl SupplierService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Creates a new supplier and its product-type links
    #[instrument(skip(self))]
    pub async fn create_supplier(
        &self,
        input: NewSupplier,
    ) -> Result<supplier::Model, ServiceError> {
        let db = &*self.db_pool;

        let model = supplier::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            phone: Set(input.phone),
            email: Set(input.email),
            address: Set(input.address),
            ..Default::default()
        }
        .insert(db)
        .await?;

        self.replace_product_type_links(model.id, &input.offered_product_type_ids)
            .await?;

        info!("Supplier created: {}", model.id);
        Ok(model)
    }

    /// Gets a supplier by ID
    #[instrument(skip(self))]
    pub async fn get_supplier(
        &self,
        supplier_id: &Uuid,
    ) -> Result<Option<supplier::Model>, ServiceError> {
        let db = &*self.db_pool;
        let supplier = supplier::Entity::find_by_id(*supplier_id).one(db).await?;
        Ok(supplier)
    }

    /// Lists all suppliers
    #[instrument(skip(self))]
    pub async fn list_suppliers(&self) -> Result<Vec<supplier::Model>, ServiceError> {
        let db = &*self.db_pool;
        let suppliers = supplier::Entity::find()
            .order_by_asc(supplier::Column::Name)
            .all(db)
            .await?;
        Ok(suppliers)
    }

    /// Lists all suppliers with their offered product types resolved
    #[instrument(skip(self))]
    pub async fn list_suppliers_with_product_types(
        &self,
    ) -> Result<Vec<SupplierWithProductTypes>, ServiceError> {
        let db = &*self.db_pool;
        let rows = supplier::Entity::find()
            .order_by_asc(supplier::Column::Name)
            .find_with_related(product_type::Entity)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(supplier, offered_product_types)| SupplierWithProductTypes {
                supplier,
                offered_product_types,
            })
            .collect())
    }

    /// Applies a partial update and returns the post-update document
    #[instrument(skip(self))]
    pub async fn update_supplier(
        &self,
        supplier_id: &Uuid,
        patch: SupplierPatch,
    ) -> Result<supplier::Model, ServiceError> {
        let db = &*self.db_pool;

        let existing = supplier::Entity::find_by_id(*supplier_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("No supplier with id {}", supplier_id))
            })?;

        let mut active: supplier::ActiveModel = existing.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(phone) = patch.phone {
            active.phone = Set(phone);
        }
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(address) = patch.address {
            active.address = Set(address);
        }

        let updated = active.update(db).await?;

        if let Some(ids) = patch.offered_product_type_ids {
            self.replace_product_type_links(updated.id, &ids).await?;
        }

        info!("Supplier updated: {}", updated.id);
        Ok(updated)
    }

    /// Deletes a supplier by surrogate id and returns the removed document
    #[instrument(skip(self))]
    pub async fn delete_supplier(
        &self,
        supplier_id: &Uuid,
    ) -> Result<supplier::Model, ServiceError> {
        let db = &*self.db_pool;

        let existing = supplier::Entity::find_by_id(*supplier_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("No supplier with id {}", supplier_id))
            })?;

        let removed = existing.clone();
        existing.delete(db).await?;

        info!("Supplier deleted: {}", removed.id);
        Ok(removed)
    }

    /// Deletes a supplier by phone number, the dashboard's natural key.
    /// Kept as a distinct operation from id-keyed deletion.
    #[instrument(skip(self))]
    pub async fn delete_supplier_by_phone(
        &self,
        phone: &str,
    ) -> Result<supplier::Model, ServiceError> {
        let db = &*self.db_pool;

        let existing = supplier::Entity::find()
            .filter(supplier::Column::Phone.eq(phone))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No supplier with phone {}", phone)))?;

        let removed = existing.clone();
        existing.delete(db).await?;

        info!("Supplier deleted by phone: {}", removed.id);
        Ok(removed)
    }

    /// Replaces the supplier's offered product-type links with the given set
    async fn replace_product_type_links(
        &self,
        supplier_id: Uuid,
        product_type_ids: &[Uuid],
    ) -> Result<(), ServiceError> {
        let db = &*self.db_pool;

        supplier_product_type::Entity::delete_many()
            .filter(supplier_product_type::Column::SupplierId.eq(supplier_id))
            .exec(db)
            .await?;

        for type_id in product_type_ids {
            supplier_product_type::ActiveModel {
                supplier_id: Set(supplier_id),
                product_type_id: Set(*type_id),
            }
            .insert(db)
            .await?;
        }

        Ok(())
    }
}
