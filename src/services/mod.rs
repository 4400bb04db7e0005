pub mod inventory;
pub mod product_types;
pub mod reports;
pub mod suppliers;
