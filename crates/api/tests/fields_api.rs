//! Integration tests for the `/fields` structured-field endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: POST /api/v1/fields/abn validates checksums
// ---------------------------------------------------------------------------

#[tokio::test]
async fn abn_checksum_endpoint() {
    let app = build_test_app();
    let response = post_json(app, "/api/v1/fields/abn", json!({ "abn": "51824753556" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["valid"], true);

    let app = build_test_app();
    let response = post_json(app, "/api/v1/fields/abn", json!({ "abn": "12345678901" })).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["valid"], false);
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/fields/phone formats valid numbers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn phone_endpoint_formats_mobiles() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/fields/phone",
        json!({ "phone": "0412345678" }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["isValid"], true);
    assert_eq!(json["data"]["sanitizedValue"], "04 12 345 678");
}

#[tokio::test]
async fn phone_endpoint_rejects_garbage() {
    let app = build_test_app();
    let response = post_json(app, "/api/v1/fields/phone", json!({ "phone": "123" })).await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["isValid"], false);
    assert_eq!(
        json["data"]["errors"][0],
        "Invalid Australian phone number format"
    );
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/fields/email reports disposable and personal domains
// ---------------------------------------------------------------------------

#[tokio::test]
async fn email_endpoint_rejects_disposable_domains() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/fields/email",
        json!({ "email": "test@tempmail.org" }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["isValid"], false);
}

#[tokio::test]
async fn email_endpoint_warns_on_personal_plus_alias() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/fields/email",
        json!({ "email": "doctor+clinic@gmail.com" }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["isValid"], true);
    assert_eq!(json["data"]["warnings"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["securityRisk"], "medium");
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/fields/ahpra checks the registration format
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ahpra_endpoint_checks_format() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/fields/ahpra",
        json!({ "registrationNumber": "MED0001234567" }),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["valid"], true);

    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/fields/ahpra",
        json!({ "registrationNumber": "NOPE" }),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["valid"], false);
}
