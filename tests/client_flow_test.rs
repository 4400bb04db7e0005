//! End-to-end flows driving the typed client against a live server instance.

use serde_json::json;
use std::sync::Arc;
use stockroom_api::{
    client::{ApiClient, ClientConfig, InventoryDashboard, InventoryItemForm, SupplierDashboard,
        SubmissionStatus, SupplierForm},
    config::AppConfig,
    db, AppState,
};

/// Boots the API on an ephemeral port and returns a client pointed at it.
async fn spawn_app() -> ApiClient {
    let mut cfg = AppConfig::new("sqlite::memory:", "127.0.0.1", 0, "test");
    cfg.db_max_connections = 1;
    cfg.db_min_connections = 1;

    let pool = db::establish_connection_from_app_config(&cfg)
        .await
        .expect("failed to create test database");
    db::run_migrations(&pool)
        .await
        .expect("failed to run migrations in tests");

    let state = AppState::new(Arc::new(pool), cfg);
    let router = axum::Router::new()
        .nest("/api/v1", stockroom_api::api_v1_routes())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve test app");
    });

    ApiClient::new(ClientConfig {
        base_url: format!("http://{}", addr),
    })
}

#[tokio::test]
async fn supplier_form_submits_despite_advisory_errors() {
    let client = spawn_app().await;

    let mut form = SupplierForm::new();
    form.set_field("name", "Acme Parts");
    form.set_field("phone", "555-0100");
    form.set_field("email", "acme@example.com");
    form.set_field("address", "1 Industrial Way");

    // The hyphenated phone is flagged but does not block submission; the
    // server is the authority and rejects it.
    assert!(form.has_errors());
    let result = form.submit(&client).await;
    assert!(result.is_err());
    assert_eq!(form.status(), SubmissionStatus::Error);

    // A settled form refuses another attempt.
    assert!(form.submit(&client).await.is_err());
}

#[tokio::test]
async fn supplier_form_happy_path_settles_success() {
    let client = spawn_app().await;

    let mut form = SupplierForm::new();
    form.set_field("name", "Acme Parts");
    form.set_field("phone", "5550100");
    form.set_field("email", "acme@example.com");
    form.set_field("address", "1 Industrial Way");

    assert!(!form.has_errors());
    let created = form.submit(&client).await.expect("create supplier");
    assert_eq!(created.phone, "5550100");
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert!(matches!(
        form.submit(&client).await,
        Err(stockroom_api::client::ClientError::AlreadySubmitted)
    ));

    let fetched = client.get_supplier(&created.id).await.expect("get supplier");
    assert_eq!(fetched.name, "Acme Parts");

    let updated = client
        .update_supplier(&created.id, &json!({ "address": "9 Harbor Road" }))
        .await
        .expect("update supplier");
    assert_eq!(updated.address, "9 Harbor Road");
}

#[tokio::test]
async fn inventory_form_preloads_suppliers() {
    let client = spawn_app().await;

    client
        .create_supplier(&json!({
            "name": "Acme Parts",
            "phone": "5550100",
            "email": "acme@example.com",
            "address": "1 Industrial Way",
        }))
        .await
        .expect("seed supplier");

    let form = InventoryItemForm::with_suppliers(&client).await;
    assert_eq!(form.suppliers().len(), 1);
    assert_eq!(form.suppliers()[0].name, "Acme Parts");

    // The product-type lookup backing supplier forms starts out empty.
    let types = client.fetch_product_types().await.expect("fetch types");
    assert!(types.is_empty());
}

#[tokio::test]
async fn dashboard_search_and_delete_round_trip() {
    let client = spawn_app().await;

    for (name, sku) in [("Solid State Drive", "SSD-007"), ("Keyboard", "KBD-001")] {
        client
            .create_inventory_item(&json!({
                "name": name,
                "sku": sku,
                "cost": 100,
                "selling_price": 150,
                "warranty_days": 90,
                "quantity_on_hand": 9,
                "reorder_level": 3,
            }))
            .await
            .expect("seed item");
    }

    let mut dashboard = InventoryDashboard::load(&client).await.expect("load");
    assert_eq!(dashboard.visible_rows().len(), 2);

    dashboard.set_search_term("KEYB");
    assert_eq!(dashboard.visible_rows().len(), 1);

    dashboard.set_search_term("");
    dashboard.delete_item(&client, "SSD-007").await;
    assert_eq!(dashboard.visible_rows().len(), 1);
    assert_eq!(dashboard.visible_rows()[0].sku, "KBD-001");

    // The deletion reached the server, not just the local list.
    let remaining = client.fetch_inventory().await.expect("fetch");
    assert_eq!(remaining.len(), 1);
}

#[tokio::test]
async fn failed_delete_leaves_dashboard_untouched() {
    let client = spawn_app().await;

    client
        .create_supplier(&json!({
            "name": "Acme Parts",
            "phone": "5550100",
            "email": "acme@example.com",
            "address": "1 Industrial Way",
        }))
        .await
        .expect("seed supplier");

    let mut dashboard = SupplierDashboard::load(&client).await.expect("load");
    dashboard.delete_supplier(&client, "0000000").await;
    assert_eq!(dashboard.visible_rows().len(), 1);
}

#[tokio::test]
async fn server_reports_arrive_as_pdf_bytes() {
    let client = spawn_app().await;

    client
        .create_inventory_item(&json!({
            "name": "Solid State Drive",
            "sku": "SSD-007",
            "cost": 100,
            "selling_price": 150,
            "warranty_days": 90,
            "quantity_on_hand": 9,
            "reorder_level": 3,
        }))
        .await
        .expect("seed item");

    let bytes = client.fetch_inventory_report().await.expect("report");
    assert!(bytes.starts_with(b"%PDF"));

    let bytes = client.fetch_supplier_report().await.expect("report");
    assert!(bytes.starts_with(b"%PDF"));
}
