mod common;

use axum::http::{Method, StatusCode};
use common::{response_bytes, response_json, TestApp};
use serde_json::json;

fn supplier_payload(name: &str, phone: &str) -> serde_json::Value {
    json!({
        "name": name,
        "phone": phone,
        "email": format!("{}@example.com", phone),
        "address": "1 Industrial Way",
    })
}

#[tokio::test]
async fn create_supplier_returns_created_document() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/supplier",
            Some(supplier_payload("Acme Parts", "5550100")),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    let supplier = &body["supplier"];
    assert_eq!(supplier["name"], "Acme Parts");
    assert_eq!(supplier["phone"], "5550100");
    assert!(supplier["id"].as_str().is_some());
}

#[tokio::test]
async fn list_uses_singular_envelope_key() {
    let app = TestApp::new().await;

    for (name, phone) in [("Acme Parts", "5550100"), ("Globex Supply", "5550101")] {
        let response = app
            .request(
                Method::POST,
                "/api/v1/supplier",
                Some(supplier_payload(name, phone)),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.request(Method::GET, "/api/v1/supplier", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let suppliers = body["supplier"].as_array().expect("supplier array");
    assert_eq!(suppliers.len(), 2);
}

#[tokio::test]
async fn get_unknown_supplier_is_not_found_with_id_in_message() {
    let app = TestApp::new().await;
    let id = uuid::Uuid::new_v4();

    let response = app
        .request(Method::GET, &format!("/api/v1/supplier/{}", id), None)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    let message = body["message"].as_str().expect("error message");
    assert!(message.contains(&id.to_string()));
}

#[tokio::test]
async fn patch_returns_post_update_document() {
    let app = TestApp::new().await;

    let created = app
        .request(
            Method::POST,
            "/api/v1/supplier",
            Some(supplier_payload("Acme Parts", "5550100")),
        )
        .await;
    let created = response_json(created).await;
    let id = created["supplier"]["id"].as_str().expect("id").to_string();

    let response = app
        .request(
            Method::PATCH,
            &format!("/api/v1/supplier/{}", id),
            Some(json!({ "address": "9 Harbor Road" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["supplier"]["address"], "9 Harbor Road");
    assert_eq!(body["supplier"]["name"], "Acme Parts");
}

#[tokio::test]
async fn delete_by_phone_removes_the_supplier() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/supplier",
            Some(supplier_payload("Acme Parts", "5550100")),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request(Method::DELETE, "/api/v1/supplier/by-phone/5550100", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["supplier"]["phone"], "5550100");

    let response = app.request(Method::GET, "/api/v1/supplier", None).await;
    let body = response_json(response).await;
    assert!(body["supplier"].as_array().expect("array").is_empty());
}

#[tokio::test]
async fn delete_unknown_phone_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::DELETE, "/api/v1/supplier/by-phone/0000000", None)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_by_id_removes_the_supplier() {
    let app = TestApp::new().await;

    let created = app
        .request(
            Method::POST,
            "/api/v1/supplier",
            Some(supplier_payload("Acme Parts", "5550100")),
        )
        .await;
    let created = response_json(created).await;
    let id = created["supplier"]["id"].as_str().expect("id").to_string();

    let response = app
        .request(Method::DELETE, &format!("/api/v1/supplier/{}", id), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request(Method::GET, &format!("/api/v1/supplier/{}", id), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_phone_is_rejected_as_bad_request_naming_the_field() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/supplier",
            Some(supplier_payload("Acme Parts", "not-a-phone")),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    let message = body["message"].as_str().expect("error message");
    assert!(message.contains("phone"));

    let response = app.request(Method::GET, "/api/v1/supplier", None).await;
    let body = response_json(response).await;
    assert!(body["supplier"].as_array().expect("array").is_empty());
}

#[tokio::test]
async fn health_reports_database_status() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/v1/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn report_streams_pdf_bytes() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/supplier",
            Some(supplier_payload("Acme Parts", "5550100")),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request(Method::POST, "/api/v1/supplier/genRep", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/pdf")
    );

    let bytes = response_bytes(response).await;
    assert!(bytes.starts_with(b"%PDF"));
}
