//! Form models mirroring the dashboard's create pages. Field edits run
//! advisory validation that records messages without blocking submission;
//! the server performs the authoritative checks.

use super::api::{ApiClient, ClientError};
use crate::entities::supplier;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{json, Map, Number, Value};
use std::collections::HashMap;
use tracing::warn;

lazy_static! {
    static ref ALPHABETIC_RE: Regex =
        Regex::new(r"^[A-Za-z\s]+$").expect("valid name regex");
    static ref SKU_RE: Regex = Regex::new(r"^[A-Za-z0-9-]+$").expect("valid SKU regex");
    static ref DIGITS_RE: Regex = Regex::new(r"^\d+$").expect("valid digits regex");
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex");
}

/// Where a form stands in its lifecycle. A settled form (success or error)
/// refuses further submissions; callers construct a fresh form instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Success,
    Error,
}

fn advisory_message(value: &str, re: &Regex, message: &str) -> Option<String> {
    if value.is_empty() || re.is_match(value) {
        None
    } else {
        Some(message.to_string())
    }
}

/// Supplier creation form
#[derive(Debug)]
pub struct SupplierForm {
    fields: HashMap<String, String>,
    errors: HashMap<String, String>,
    status: SubmissionStatus,
    product_type_ids: Vec<String>,
}

impl Default for SupplierForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SupplierForm {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
            errors: HashMap::new(),
            status: SubmissionStatus::Idle,
            product_type_ids: Vec::new(),
        }
    }

    /// Records a field edit and refreshes its advisory validation message.
    pub fn set_field(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());

        let message = match name {
            "name" => advisory_message(value, &ALPHABETIC_RE, "Name must contain alphabets only"),
            "phone" => advisory_message(value, &DIGITS_RE, "Phone must contain digits only"),
            "email" => advisory_message(value, &EMAIL_RE, "E-mail address is not valid"),
            _ => None,
        };

        match message {
            Some(msg) => {
                self.errors.insert(name.to_string(), msg);
            }
            None => {
                self.errors.remove(name);
            }
        }
    }

    /// Replaces the selected product type ids
    pub fn set_product_types(&mut self, ids: Vec<String>) {
        self.product_type_ids = ids;
    }

    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Builds the POST body from the current field mapping. Every field is
    /// included as entered, advisory errors or not.
    pub fn payload(&self) -> Value {
        let mut body = Map::new();
        for (name, value) in &self.fields {
            body.insert(name.clone(), Value::String(value.clone()));
        }
        body.insert(
            "offered_product_type_ids".to_string(),
            json!(self.product_type_ids),
        );
        Value::Object(body)
    }

    /// Submits the form regardless of recorded advisory errors. The outcome
    /// settles the form; a settled form cannot be submitted again.
    pub async fn submit(&mut self, client: &ApiClient) -> Result<supplier::Model, ClientError> {
        if self.status != SubmissionStatus::Idle {
            return Err(ClientError::AlreadySubmitted);
        }

        match client.create_supplier(&self.payload()).await {
            Ok(created) => {
                self.status = SubmissionStatus::Success;
                Ok(created)
            }
            Err(err) => {
                self.status = SubmissionStatus::Error;
                Err(err)
            }
        }
    }
}

/// Inventory item creation form. Carries the supplier list backing the
/// form's supplier selection control.
#[derive(Debug)]
pub struct InventoryItemForm {
    fields: HashMap<String, String>,
    errors: HashMap<String, String>,
    status: SubmissionStatus,
    suppliers: Vec<supplier::Model>,
}

impl Default for InventoryItemForm {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryItemForm {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
            errors: HashMap::new(),
            status: SubmissionStatus::Idle,
            suppliers: Vec::new(),
        }
    }

    /// Builds a form with the supplier list preloaded. A failed fetch is
    /// logged and leaves the list empty; the form stays usable.
    pub async fn with_suppliers(client: &ApiClient) -> Self {
        let mut form = Self::new();
        match client.fetch_suppliers().await {
            Ok(suppliers) => form.suppliers = suppliers,
            Err(err) => warn!("Failed to load suppliers for inventory form: {}", err),
        }
        form
    }

    /// Records a field edit and refreshes its advisory validation message.
    pub fn set_field(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());

        let message = match name {
            "name" => advisory_message(value, &ALPHABETIC_RE, "Name must contain alphabets only"),
            "sku" => advisory_message(
                value,
                &SKU_RE,
                "SKU must contain letters, digits, and hyphens only",
            ),
            "cost" | "selling_price" | "warranty_days" | "quantity_on_hand" | "reorder_level" => {
                advisory_message(value, &DIGITS_RE, "Value must contain digits only")
            }
            _ => None,
        };

        match message {
            Some(msg) => {
                self.errors.insert(name.to_string(), msg);
            }
            None => {
                self.errors.remove(name);
            }
        }
    }

    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn suppliers(&self) -> &[supplier::Model] {
        &self.suppliers
    }

    /// Builds the POST body from the current field mapping. Numeric fields
    /// are sent as numbers when they parse and as entered otherwise, so the
    /// server sees exactly what the user typed.
    pub fn payload(&self) -> Value {
        let mut body = Map::new();
        for (name, value) in &self.fields {
            let encoded = match name.as_str() {
                "cost" | "selling_price" => value
                    .parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(value.clone())),
                "warranty_days" | "quantity_on_hand" | "reorder_level" => value
                    .parse::<i64>()
                    .map(|n| Value::Number(n.into()))
                    .unwrap_or_else(|_| Value::String(value.clone())),
                _ => Value::String(value.clone()),
            };
            body.insert(name.clone(), encoded);
        }
        Value::Object(body)
    }

    /// Submits the form regardless of recorded advisory errors. The outcome
    /// settles the form; a settled form cannot be submitted again.
    pub async fn submit(
        &mut self,
        client: &ApiClient,
    ) -> Result<crate::entities::inventory_item::Model, ClientError> {
        if self.status != SubmissionStatus::Idle {
            return Err(ClientError::AlreadySubmitted);
        }

        match client.create_inventory_item(&self.payload()).await {
            Ok(created) => {
                self.status = SubmissionStatus::Success;
                Ok(created)
            }
            Err(err) => {
                self.status = SubmissionStatus::Error;
                Err(err)
            }
        }
    }
}
