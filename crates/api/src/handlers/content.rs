//! Handlers for the `/compliance`, `/content`, and `/security` resources.
//!
//! Thin request/response wrappers over the pure validators in
//! `practiceguard_core`; all rule logic lives there.

use axum::Json;
use practiceguard_core::compliance::{check_compliance, compliance_score, ComplianceCheck};
use practiceguard_core::realtime::{validate_content_realtime, RealtimeValidation};
use practiceguard_core::report::{validate_content, ContentReport};
use practiceguard_core::security::scan_security;
use practiceguard_core::types::ValidationResult;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;

/// Request body for all freeform-content endpoints.
///
/// The 50k bound is a transport guard; the scanner itself only warns
/// (never caps) at 10k characters.
#[derive(Debug, Deserialize, Validate)]
pub struct ContentBody {
    #[validate(length(max = 50000, message = "content must not exceed 50000 characters"))]
    pub content: String,
}

/// Compliance check plus its derived numeric score.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCheckResponse {
    pub check: ComplianceCheck,
    /// 0-100, 20 points deducted per fired category.
    pub score: u8,
}

/// POST /api/v1/compliance/check
///
/// Run the AHPRA rule engine over the supplied content and return the
/// per-category flags, violations, suggestions, and score.
pub async fn check(
    Json(body): Json<ContentBody>,
) -> AppResult<Json<DataResponse<ComplianceCheckResponse>>> {
    body.validate()?;
    let check = check_compliance(&body.content);
    let score = compliance_score(&check);
    Ok(Json(DataResponse {
        data: ComplianceCheckResponse { check, score },
    }))
}

/// POST /api/v1/content/validate
///
/// Full pipeline: sanitize once, then run the compliance engine and
/// security scanner over the sanitized text and merge the results.
pub async fn validate(
    Json(body): Json<ContentBody>,
) -> AppResult<Json<DataResponse<ContentReport>>> {
    body.validate()?;
    let report = validate_content(&body.content);
    tracing::debug!(
        report_id = %report.report_id,
        risk = ?report.compliance.risk_level,
        publishable = report.publishable,
        "Content report generated"
    );
    Ok(Json(DataResponse { data: report }))
}

/// POST /api/v1/content/realtime
///
/// Lightweight composition for live editing UIs. Callers are expected to
/// debounce; the endpoint itself is stateless.
pub async fn realtime(
    Json(body): Json<ContentBody>,
) -> AppResult<Json<DataResponse<RealtimeValidation>>> {
    body.validate()?;
    Ok(Json(DataResponse {
        data: validate_content_realtime(&body.content),
    }))
}

/// POST /api/v1/security/scan
///
/// Injection-pattern scan only, without the compliance rules.
pub async fn scan(
    Json(body): Json<ContentBody>,
) -> AppResult<Json<DataResponse<ValidationResult>>> {
    body.validate()?;
    Ok(Json(DataResponse {
        data: scan_security(&body.content),
    }))
}
