mod common;

use axum::http::{Method, StatusCode};
use common::{response_json, TestApp};
use serde_json::json;

#[tokio::test]
async fn create_and_list_product_types() {
    let app = TestApp::new().await;

    for name in ["Storage", "Peripherals"] {
        let response = app
            .request(
                Method::POST,
                "/api/v1/product-types",
                Some(json!({ "name": name })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .request(Method::GET, "/api/v1/product-types", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let types = body["product_type"].as_array().expect("product_type array");
    assert_eq!(types.len(), 2);
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/product-types",
            Some(json!({ "name": "" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn supplier_can_offer_product_types() {
    let app = TestApp::new().await;

    let mut type_ids = Vec::new();
    for name in ["Storage", "Peripherals"] {
        let response = app
            .request(
                Method::POST,
                "/api/v1/product-types",
                Some(json!({ "name": name })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response_json(response).await;
        type_ids.push(
            body["product_type"]["id"]
                .as_str()
                .expect("id")
                .to_string(),
        );
    }

    let response = app
        .request(
            Method::POST,
            "/api/v1/supplier",
            Some(json!({
                "name": "Acme Parts",
                "phone": "5550100",
                "email": "acme@example.com",
                "address": "1 Industrial Way",
                "offered_product_type_ids": type_ids,
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}
