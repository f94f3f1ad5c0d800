//! HTTP-level integration tests for the content validation endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the
//! router, exercising serialization and the full middleware stack on top
//! of the pure core engine.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: POST /api/v1/compliance/check flags prohibited content
// ---------------------------------------------------------------------------

#[tokio::test]
async fn compliance_check_flags_prohibited_content() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/compliance/check",
        json!({ "content": "Our miracle treatment cures all patients instantly" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let check = &json["data"]["check"];
    assert_eq!(check["hasProhibitedTerms"], true);
    assert_eq!(check["hasTherapeuticClaims"], true);
    assert_eq!(check["riskLevel"], "high");
    assert!(check["violations"].as_array().unwrap().len() >= 2);
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/compliance/check passes clean content
// ---------------------------------------------------------------------------

#[tokio::test]
async fn compliance_check_passes_clean_content() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/compliance/check",
        json!({ "content": "Our clinic offers routine dental check-ups." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["check"]["riskLevel"], "low");
    assert_eq!(json["data"]["score"], 100);
    assert!(json["data"]["check"]["violations"]
        .as_array()
        .unwrap()
        .is_empty());
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/content/validate blocks testimonial content
// ---------------------------------------------------------------------------

#[tokio::test]
async fn content_validate_blocks_testimonials() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/content/validate",
        json!({ "content": "Patient Sarah says this cured her completely, read her testimonial" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let report = &json["data"];
    assert_eq!(report["compliance"]["riskLevel"], "critical");
    assert_eq!(report["publishable"], false);
    assert!(report["reportId"].as_str().is_some());
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/content/validate redacts PII before matching
// ---------------------------------------------------------------------------

#[tokio::test]
async fn content_validate_redacts_pii() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/content/validate",
        json!({ "content": "Call about Medicare #2950156321 or card 4111 1111 1111 1111" }),
    )
    .await;

    let json = body_json(response).await;
    let sanitized = json["data"]["sanitized"].as_str().unwrap();
    assert!(sanitized.contains("[MEDICARE REDACTED]"));
    assert!(sanitized.contains("[CARD REDACTED]"));
    assert!(!sanitized.contains("4111"));
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/content/realtime orders issues and scores at 25/error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn realtime_scores_twenty_five_per_error() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/content/realtime",
        json!({ "content": "a painless visit" }),
    )
    .await;

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["isCompliant"], false);
    assert_eq!(data["score"], 75);
    assert_eq!(data["issues"][0]["type"], "error");
    assert_eq!(data["issues"][1]["type"], "warning");
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/security/scan flags script tags
// ---------------------------------------------------------------------------

#[tokio::test]
async fn security_scan_flags_script_tags() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/security/scan",
        json!({ "content": "hello <script>alert(1)</script>" }),
    )
    .await;

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["isValid"], false);
    assert_eq!(data["securityRisk"], "high");
    assert_eq!(data["errors"][0], "Potentially malicious content detected");
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/input/validate applies the registration schema
// ---------------------------------------------------------------------------

#[tokio::test]
async fn input_validate_applies_registration_schema() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/input/validate",
        json!({
            "type": "ahpra_registration",
            "input": {
                "registrationNumber": "MED0001234567",
                "profession": "General Practitioner",
                "practiceState": "NSW",
                "practicePostcode": "2000",
            }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["isValid"], true);
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/input/validate surfaces compliance errors for content
// ---------------------------------------------------------------------------

#[tokio::test]
async fn input_validate_blocks_noncompliant_patient_content() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/input/validate",
        json!({
            "type": "patient_content",
            "checkCompliance": true,
            "input": {
                "title": "A truly special offer",
                "content": "Read this grateful patient testimonial about our miracle results",
                "contentType": "social_post",
                "targetAudience": "patients",
                "medicalDisclaimer": true,
                "ahpraCompliant": true,
            }
        }),
    )
    .await;

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["isValid"], false);
    let errors = data["errors"].as_array().unwrap();
    assert!(
        errors
            .iter()
            .any(|e| e.as_str().unwrap().starts_with("content:")),
        "expected field-qualified content errors, got {errors:?}"
    );
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/analytics/anonymize drops identifiers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn anonymize_drops_identifiers_at_maximum() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/analytics/anonymize",
        json!({
            "level": "maximum",
            "record": {
                "name": "Sarah Jones",
                "email": "sarah@example.com",
                "state": "NSW",
                "appointmentType": "consultation",
            }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_object().unwrap();
    assert!(!data.contains_key("name"));
    assert!(!data.contains_key("email"));
    assert_eq!(data["state"], "NSW");
}
