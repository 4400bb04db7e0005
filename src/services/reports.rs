use crate::{
    errors::ServiceError,
    pdf::TableReport,
    services::{inventory::InventoryService, suppliers::SupplierService},
};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{info, instrument};

/// Builds the per-entity PDF reports.
///
/// Report bytes are returned to the caller so handlers can stream them in the
/// response body. Concurrent builds are bounded by a semaphore so a burst of
/// report requests cannot exhaust the server.
#[derive(Clone)]
pub struct ReportService {
    suppliers: SupplierService,
    inventory: InventoryService,
    permits: Arc<Semaphore>,
}

impl ReportService {
    pub fn new(
        suppliers: SupplierService,
        inventory: InventoryService,
        max_concurrency: usize,
    ) -> Self {
        Self {
            suppliers,
            inventory,
            permits: Arc::new(Semaphore::new(max_concurrency.max(1))),
        }
    }

    /// Supplier report: one row per supplier with its offered product types resolved.
    #[instrument(skip(self))]
    pub async fn supplier_report(&self) -> Result<Vec<u8>, ServiceError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| ServiceError::InternalError(e.to_string()))?;

        let suppliers = self.suppliers.list_suppliers_with_product_types().await?;

        let mut report = TableReport::new(
            "Supplier Report",
            vec!["Supplier Name".into(), "Offered Product Types".into()],
        );
        for entry in &suppliers {
            let product_types = entry
                .offered_product_types
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            report.push_row(vec![entry.supplier.name.clone(), product_types]);
        }

        let bytes = report
            .render()
            .map_err(|e| ServiceError::ReportError(e.to_string()))?;

        info!(rows = report.row_count(), "Generated supplier report");
        Ok(bytes)
    }

    /// Inventory report: one row per item with stock figures.
    #[instrument(skip(self))]
    pub async fn inventory_report(&self) -> Result<Vec<u8>, ServiceError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| ServiceError::InternalError(e.to_string()))?;

        let items = self.inventory.list_items().await?;

        let mut report = TableReport::new(
            "Inventory Report",
            vec![
                "Name".into(),
                "SKU".into(),
                "Stock On Hand".into(),
                "Reorder Level".into(),
            ],
        );
        for item in &items {
            report.push_row(vec![
                item.name.clone(),
                item.sku.clone(),
                item.quantity_on_hand.to_string(),
                item.reorder_level.to_string(),
            ]);
        }

        let bytes = report
            .render()
            .map_err(|e| ServiceError::ReportError(e.to_string()))?;

        info!(rows = report.row_count(), "Generated inventory report");
        Ok(bytes)
    }
}
