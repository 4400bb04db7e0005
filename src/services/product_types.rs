use crate::{db::DbPool, entities::product_type, errors::ServiceError};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Service for the product-type lookup table backing supplier forms
#[derive(Clone)]
pub struct ProductTypeService {
    db_pool: Arc<DbPool>,
}

impl ProductTypeService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn list_product_types(&self) -> Result<Vec<product_type::Model>, ServiceError> {
        let db = &*self.db_pool;
        let types = product_type::Entity::find()
            .order_by_asc(product_type::Column::Name)
            .all(db)
            .await?;
        Ok(types)
    }

    #[instrument(skip(self))]
    pub async fn create_product_type(
        &self,
        name: String,
    ) -> Result<product_type::Model, ServiceError> {
        let db = &*self.db_pool;

        let model = product_type::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!("Product type created: {}", model.id);
        Ok(model)
    }
}
