//! Dashboard models backing the supplier and inventory list pages:
//! client-side search, row deletion by natural key, and PDF export of the
//! currently visible rows.

use super::api::{ApiClient, ClientError};
use crate::entities::{inventory_item, supplier};
use crate::pdf::TableReport;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Fixed export filename; a fresh export overwrites the previous one.
pub const INVENTORY_REPORT_FILENAME: &str = "inventory_report.pdf";
pub const SUPPLIERS_REPORT_FILENAME: &str = "suppliers_report.pdf";

const INVENTORY_COLUMNS: [&str; 4] = ["Name", "SKU", "Stock On Hand", "Reorder Level"];
const SUPPLIER_COLUMNS: [&str; 4] = ["Name", "Phone Number", "E-Mail", "Address"];

fn matches_search(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

/// Inventory list page model
#[derive(Debug, Default)]
pub struct InventoryDashboard {
    items: Vec<inventory_item::Model>,
    search_term: String,
}

impl InventoryDashboard {
    /// Fetches the full inventory collection
    pub async fn load(client: &ApiClient) -> Result<Self, ClientError> {
        let items = client.fetch_inventory().await?;
        Ok(Self {
            items,
            search_term: String::new(),
        })
    }

    pub fn from_items(items: Vec<inventory_item::Model>) -> Self {
        Self {
            items,
            search_term: String::new(),
        }
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Rows matching the current search term, case-insensitively on name.
    /// An empty term shows everything.
    pub fn visible_rows(&self) -> Vec<&inventory_item::Model> {
        self.items
            .iter()
            .filter(|item| matches_search(&item.name, &self.search_term))
            .collect()
    }

    /// Deletes an item by SKU. On success the row disappears from the local
    /// list without a refetch; a failure is logged and the list is untouched.
    pub async fn delete_item(&mut self, client: &ApiClient, sku: &str) {
        match client.delete_inventory_item(sku).await {
            Ok(_) => self.remove_local(sku),
            Err(err) => warn!("Failed to delete inventory item {}: {}", sku, err),
        }
    }

    fn remove_local(&mut self, sku: &str) {
        self.items.retain(|item| item.sku != sku);
    }

    /// Table cells for the currently visible rows, in export column order
    pub fn report_rows(&self) -> Vec<Vec<String>> {
        self.visible_rows()
            .into_iter()
            .map(|item| {
                vec![
                    item.name.clone(),
                    item.sku.clone(),
                    item.quantity_on_hand.to_string(),
                    item.reorder_level.to_string(),
                ]
            })
            .collect()
    }

    /// Renders the visible rows as a PDF report
    pub fn export_pdf(&self) -> Result<Vec<u8>, ClientError> {
        let mut report = TableReport::new(
            "Inventory Report",
            INVENTORY_COLUMNS.iter().map(|c| c.to_string()).collect(),
        );
        for row in self.report_rows() {
            report.push_row(row);
        }
        report
            .render()
            .map_err(|e| ClientError::Report(e.to_string()))
    }

    /// Writes the export into `dir` under the fixed report filename
    pub fn save_report(&self, dir: &Path) -> Result<PathBuf, ClientError> {
        let bytes = self.export_pdf()?;
        let path = dir.join(INVENTORY_REPORT_FILENAME);
        fs::write(&path, bytes)?;
        Ok(path)
    }
}

/// Supplier list page model
#[derive(Debug, Default)]
pub struct SupplierDashboard {
    suppliers: Vec<supplier::Model>,
    search_term: String,
}

impl SupplierDashboard {
    /// Fetches the full supplier collection
    pub async fn load(client: &ApiClient) -> Result<Self, ClientError> {
        let suppliers = client.fetch_suppliers().await?;
        Ok(Self {
            suppliers,
            search_term: String::new(),
        })
    }

    pub fn from_suppliers(suppliers: Vec<supplier::Model>) -> Self {
        Self {
            suppliers,
            search_term: String::new(),
        }
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Rows matching the current search term, case-insensitively on name.
    /// An empty term shows everything.
    pub fn visible_rows(&self) -> Vec<&supplier::Model> {
        self.suppliers
            .iter()
            .filter(|s| matches_search(&s.name, &self.search_term))
            .collect()
    }

    /// Deletes a supplier by phone number. On success the row disappears
    /// from the local list without a refetch; a failure is logged and the
    /// list is untouched.
    pub async fn delete_supplier(&mut self, client: &ApiClient, phone: &str) {
        match client.delete_supplier_by_phone(phone).await {
            Ok(_) => self.remove_local(phone),
            Err(err) => warn!("Failed to delete supplier with phone {}: {}", phone, err),
        }
    }

    fn remove_local(&mut self, phone: &str) {
        self.suppliers.retain(|s| s.phone != phone);
    }

    /// Table cells for the currently visible rows, in export column order
    pub fn report_rows(&self) -> Vec<Vec<String>> {
        self.visible_rows()
            .into_iter()
            .map(|s| {
                vec![
                    s.name.clone(),
                    s.phone.clone(),
                    s.email.clone(),
                    s.address.clone(),
                ]
            })
            .collect()
    }

    /// Renders the visible rows as a PDF report
    pub fn export_pdf(&self) -> Result<Vec<u8>, ClientError> {
        let mut report = TableReport::new(
            "Supplier Report",
            SUPPLIER_COLUMNS.iter().map(|c| c.to_string()).collect(),
        );
        for row in self.report_rows() {
            report.push_row(row);
        }
        report
            .render()
            .map_err(|e| ClientError::Report(e.to_string()))
    }

    /// Writes the export into `dir` under the fixed report filename
    pub fn save_report(&self, dir: &Path) -> Result<PathBuf, ClientError> {
        let bytes = self.export_pdf()?;
        let path = dir.join(SUPPLIERS_REPORT_FILENAME);
        fs::write(&path, bytes)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn item(name: &str, sku: &str, quantity: i32, reorder: i32) -> inventory_item::Model {
        inventory_item::Model {
            id: Uuid::new_v4(),
            name: name.into(),
            sku: sku.into(),
            description: None,
            cost: dec!(100),
            selling_price: dec!(150),
            warranty_days: 90,
            quantity_on_hand: quantity,
            reorder_level: reorder,
            supplier_id: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn contact(name: &str, phone: &str) -> supplier::Model {
        supplier::Model {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: phone.into(),
            email: format!("{}@example.com", phone),
            address: "1 Industrial Way".into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn search_is_case_insensitive_substring_on_name() {
        let mut dashboard = InventoryDashboard::from_items(vec![
            item("Solid State Drive", "SSD-007", 4, 2),
            item("Keyboard", "KBD-001", 9, 3),
        ]);

        dashboard.set_search_term("sOlId");
        let visible = dashboard.visible_rows();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].sku, "SSD-007");
    }

    #[test]
    fn empty_search_term_shows_all_rows() {
        let mut dashboard = SupplierDashboard::from_suppliers(vec![
            contact("Acme Parts", "5550100"),
            contact("Globex Supply", "5550101"),
        ]);

        dashboard.set_search_term("globex");
        assert_eq!(dashboard.visible_rows().len(), 1);

        dashboard.set_search_term("");
        assert_eq!(dashboard.visible_rows().len(), 2);
    }

    #[test]
    fn search_never_mutates_the_backing_list() {
        let mut dashboard = InventoryDashboard::from_items(vec![
            item("Solid State Drive", "SSD-007", 4, 2),
            item("Keyboard", "KBD-001", 9, 3),
        ]);

        dashboard.set_search_term("nothing matches this");
        assert!(dashboard.visible_rows().is_empty());

        dashboard.set_search_term("");
        assert_eq!(dashboard.visible_rows().len(), 2);
    }

    #[test]
    fn local_removal_drops_exactly_the_deleted_row() {
        let mut dashboard = SupplierDashboard::from_suppliers(vec![
            contact("Acme Parts", "5550100"),
            contact("Globex Supply", "5550101"),
        ]);

        dashboard.remove_local("5550100");
        let remaining = dashboard.visible_rows();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].phone, "5550101");
    }

    #[test]
    fn report_rows_follow_the_visible_set() {
        let mut dashboard = InventoryDashboard::from_items(vec![
            item("Solid State Drive", "SSD-007", 4, 2),
            item("Keyboard", "KBD-001", 9, 3),
        ]);

        dashboard.set_search_term("keyboard");
        let rows = dashboard.report_rows();
        assert_eq!(rows, vec![vec![
            "Keyboard".to_string(),
            "KBD-001".to_string(),
            "9".to_string(),
            "3".to_string(),
        ]]);
    }

    #[test]
    fn export_renders_pdf_bytes() {
        let dashboard = InventoryDashboard::from_items(vec![item(
            "Solid State Drive",
            "SSD-007",
            4,
            2,
        )]);

        let bytes = dashboard.export_pdf().expect("render export");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn save_report_overwrites_previous_export() {
        let dir = tempfile::tempdir().expect("temp dir");
        let dashboard = SupplierDashboard::from_suppliers(vec![contact("Acme Parts", "5550100")]);

        let first = dashboard.save_report(dir.path()).expect("first export");
        let second = dashboard.save_report(dir.path()).expect("second export");

        assert_eq!(first, second);
        assert_eq!(
            first.file_name().and_then(|n| n.to_str()),
            Some(SUPPLIERS_REPORT_FILENAME)
        );
        assert!(first.exists());
    }
}
