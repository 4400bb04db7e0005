use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, ConnectionTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

lazy_static! {
    /// Letters and spaces only
    pub static ref PRODUCT_NAME_RE: Regex =
        Regex::new(r"^[A-Za-z\s]+$").expect("valid product name regex");
    /// Letters, digits, and hyphens
    pub static ref SKU_RE: Regex = Regex::new(r"^[A-Za-z0-9-]+$").expect("valid SKU regex");
}

/// Inventory item entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Product name
    #[validate(regex(
        path = "PRODUCT_NAME_RE",
        message = "Product name can only contain letters and spaces"
    ))]
    pub name: String,

    /// SKU; unique natural key used for lookup and delete
    #[validate(regex(
        path = "SKU_RE",
        message = "SKU may only contain letters, numbers, and hyphens"
    ))]
    pub sku: String,

    /// Free-text product description
    pub description: Option<String>,

    /// Cost per unit
    pub cost: Decimal,

    /// Selling price per unit
    pub selling_price: Decimal,

    /// Warranty period in days
    #[validate(range(min = 0, message = "Warranty days must be non-negative"))]
    pub warranty_days: i32,

    /// Quantity currently on hand
    #[validate(range(min = 0, message = "Quantity must be non-negative"))]
    pub quantity_on_hand: i32,

    /// Reorder threshold
    #[validate(range(min = 0, message = "Reorder level must be non-negative"))]
    pub reorder_level: i32,

    /// Supplying supplier
    pub supplier_id: Option<Uuid>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model {
    /// An item is low stock when on-hand quantity drops below its reorder level.
    /// Flagged by the dashboard; not enforced server-side.
    pub fn is_low_stock(&self) -> bool {
        self.quantity_on_hand < self.reorder_level
    }
}

/// Inventory item relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id",
        on_delete = "SetNull"
    )]
    Supplier,
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;

        if insert {
            active_model.created_at = Set(Utc::now());
        }
        active_model.updated_at = Set(Some(Utc::now()));

        let model: Model = active_model.clone().try_into().map_err(|_| {
            DbErr::Custom("Failed to convert ActiveModel to Model for validation".to_string())
        })?;

        if let Err(err) = model.validate() {
            return Err(DbErr::Custom(format!("Validation error: {}", err)));
        }

        Ok(active_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn model(name: &str, sku: &str, quantity: i32, reorder: i32) -> Model {
        Model {
            id: Uuid::new_v4(),
            name: name.into(),
            sku: sku.into(),
            description: None,
            cost: dec!(100),
            selling_price: dec!(150),
            warranty_days: 365,
            quantity_on_hand: quantity,
            reorder_level: reorder,
            supplier_id: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn low_stock_flag_tracks_reorder_level() {
        assert!(model("Solid State Drive", "SSD-007", 3, 5).is_low_stock());
        assert!(!model("Solid State Drive", "SSD-007", 5, 5).is_low_stock());
        assert!(!model("Solid State Drive", "SSD-007", 9, 5).is_low_stock());
    }

    #[test]
    fn name_with_digits_fails_validation() {
        assert!(model("Drive 2000", "SSD-007", 1, 1).validate().is_err());
    }

    #[test]
    fn sku_allows_letters_digits_hyphens() {
        assert!(model("Solid State Drive", "SSD-007", 1, 1)
            .validate()
            .is_ok());
        assert!(model("Solid State Drive", "SSD 007", 1, 1)
            .validate()
            .is_err());
    }
}
