pub mod common;
pub mod inventory;
pub mod product_types;
pub mod suppliers;

use crate::db::DbPool;
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub suppliers: crate::services::suppliers::SupplierService,
    pub inventory: crate::services::inventory::InventoryService,
    pub product_types: crate::services::product_types::ProductTypeService,
    pub reports: crate::services::reports::ReportService,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>, report_max_concurrency: usize) -> Self {
        let suppliers = crate::services::suppliers::SupplierService::new(db_pool.clone());
        let inventory = crate::services::inventory::InventoryService::new(db_pool.clone());
        let product_types = crate::services::product_types::ProductTypeService::new(db_pool);
        let reports = crate::services::reports::ReportService::new(
            suppliers.clone(),
            inventory.clone(),
            report_max_concurrency,
        );

        Self {
            suppliers,
            inventory,
            product_types,
            reports,
        }
    }
}
