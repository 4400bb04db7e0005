use crate::entities::{inventory_item, product_type, supplier};
use crate::errors::ErrorResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::env;
use tracing::debug;
use uuid::Uuid;

/// Client-side errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Report error: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Form already submitted; construct a new form to retry")]
    AlreadySubmitted,
}

/// Client configuration. A single base URL replaces the host:port literals
/// the original dashboard repeated across its pages.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads the base URL from `APP__API_BASE_URL` when set.
    pub fn from_env() -> Self {
        let base_url = env::var("APP__API_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::default().base_url);
        Self { base_url }
    }
}

/// Thin typed wrappers over the REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    /// Fetch the full supplier collection
    pub async fn fetch_suppliers(&self) -> Result<Vec<supplier::Model>, ClientError> {
        let response = self.http.get(self.url("/supplier")).send().await?;
        unwrap_envelope(check(response).await?, "supplier")
    }

    /// Fetch the full inventory collection
    pub async fn fetch_inventory(&self) -> Result<Vec<inventory_item::Model>, ClientError> {
        let response = self.http.get(self.url("/inventory")).send().await?;
        unwrap_envelope(check(response).await?, "inventory")
    }

    /// Fetch the product types backing supplier forms
    pub async fn fetch_product_types(&self) -> Result<Vec<product_type::Model>, ClientError> {
        let response = self.http.get(self.url("/product-types")).send().await?;
        unwrap_envelope(check(response).await?, "product_type")
    }

    /// Create a supplier from a JSON payload; returns the created document
    pub async fn create_supplier(&self, payload: &Value) -> Result<supplier::Model, ClientError> {
        let response = self
            .http
            .post(self.url("/supplier"))
            .json(payload)
            .send()
            .await?;
        unwrap_envelope(check(response).await?, "supplier")
    }

    /// Create an inventory item from a JSON payload; returns the created document
    pub async fn create_inventory_item(
        &self,
        payload: &Value,
    ) -> Result<inventory_item::Model, ClientError> {
        let response = self
            .http
            .post(self.url("/inventory"))
            .json(payload)
            .send()
            .await?;
        unwrap_envelope(check(response).await?, "inventory")
    }

    /// Get a supplier by surrogate id
    pub async fn get_supplier(&self, id: &Uuid) -> Result<supplier::Model, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/supplier/{}", id)))
            .send()
            .await?;
        unwrap_envelope(check(response).await?, "supplier")
    }

    /// Apply a partial update to a supplier; returns the post-update document
    pub async fn update_supplier(
        &self,
        id: &Uuid,
        payload: &Value,
    ) -> Result<supplier::Model, ClientError> {
        let response = self
            .http
            .patch(self.url(&format!("/supplier/{}", id)))
            .json(payload)
            .send()
            .await?;
        unwrap_envelope(check(response).await?, "supplier")
    }

    /// Delete a supplier by phone number, the dashboard's natural key
    pub async fn delete_supplier_by_phone(
        &self,
        phone: &str,
    ) -> Result<supplier::Model, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/supplier/by-phone/{}", phone)))
            .send()
            .await?;
        unwrap_envelope(check(response).await?, "supplier")
    }

    /// Delete an inventory item by SKU
    pub async fn delete_inventory_item(
        &self,
        sku: &str,
    ) -> Result<inventory_item::Model, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/inventory/{}", sku)))
            .send()
            .await?;
        unwrap_envelope(check(response).await?, "inventory")
    }

    /// Request the server-generated supplier report; returns PDF bytes
    pub async fn fetch_supplier_report(&self) -> Result<Vec<u8>, ClientError> {
        let response = self
            .http
            .post(self.url("/supplier/genRep"))
            .send()
            .await?;
        let response = error_for_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Request the server-generated inventory report; returns PDF bytes
    pub async fn fetch_inventory_report(&self) -> Result<Vec<u8>, ClientError> {
        let response = self
            .http
            .post(self.url("/inventory/genRep"))
            .send()
            .await?;
        let response = error_for_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Converts a non-success response into a `ClientError::Api` carrying the
/// server's error message, otherwise passes the response through.
async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Checks the response status and decodes the JSON body
async fn check(response: reqwest::Response) -> Result<Value, ClientError> {
    let response = error_for_status(response).await?;
    let value = response.json::<Value>().await?;
    debug!("API response: {}", value);
    Ok(value)
}

/// Pulls the payload out of the `{ "<entity>": ... }` response envelope
fn unwrap_envelope<T: DeserializeOwned>(mut value: Value, key: &str) -> Result<T, ClientError> {
    let inner = value
        .get_mut(key)
        .map(Value::take)
        .unwrap_or(Value::Null);
    Ok(serde_json::from_value(inner)?)
}
