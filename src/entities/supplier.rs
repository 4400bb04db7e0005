use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, ConnectionTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

lazy_static! {
    /// Digits only, optionally with a leading plus
    pub static ref PHONE_RE: Regex = Regex::new(r"^\+?\d{7,15}$").expect("valid phone regex");
}

/// Supplier entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Supplier name
    #[validate(length(
        min = 1,
        max = 255,
        message = "Supplier name must be between 1 and 255 characters"
    ))]
    pub name: String,

    /// Phone number; externally unique, the dashboard's delete key
    #[validate(regex(path = "PHONE_RE", message = "Phone must be 7-15 digits"))]
    pub phone: String,

    /// Contact email
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    /// Postal address
    #[validate(length(max = 500, message = "Address cannot exceed 500 characters"))]
    pub address: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

/// Supplier entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::inventory_item::Entity")]
    InventoryItems,
}

impl Related<super::inventory_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryItems.def()
    }
}

// Offered product types resolve through the junction table
impl Related<super::product_type::Entity> for Entity {
    fn to() -> RelationDef {
        super::supplier_product_type::Relation::ProductType.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::supplier_product_type::Relation::Supplier
                .def()
                .rev(),
        )
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

    fn model(phone: &str, email: &str) -> Model {
        Model {
            id: Uuid::new_v4(),
            name: "Acme Supplies".into(),
            phone: phone.into(),
            email: email.into(),
            address: "123 Supplier St".into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn well_formed_supplier_passes_validation() {
        assert!(model("0771234567", "sales@acme.example").validate().is_ok());
    }

    #[test]
    fn alphabetic_phone_is_rejected() {
        assert!(model("CALL-ME", "sales@acme.example").validate().is_err());
    }

    #[test]
    fn malformed_email_is_rejected() {
        assert!(model("0771234567", "not-an-email").validate().is_err());
    }
}
