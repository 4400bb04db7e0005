//! Typed client for the stockroom REST API: thin data-access wrappers, form
//! models with advisory field validation, and dashboard models with
//! client-side search and PDF export.

pub mod api;
pub mod dashboard;
pub mod forms;

pub use api::{ApiClient, ClientConfig, ClientError};
pub use dashboard::{InventoryDashboard, SupplierDashboard};
pub use forms::{InventoryItemForm, SubmissionStatus, SupplierForm};
