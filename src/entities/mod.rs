pub mod inventory_item;
pub mod product_type;
pub mod supplier;
pub mod supplier_product_type;
