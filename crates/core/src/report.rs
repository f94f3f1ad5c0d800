//! Report aggregation: the full sanitize -> check -> scan pipeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::compliance::{check_compliance, compliance_score, ComplianceCheck};
use crate::sanitize::sanitize;
use crate::security::scan_security;
use crate::types::{SecurityRisk, Timestamp, ValidationResult};

/// Combined compliance and security report for one piece of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReport {
    /// Reference id for correlating the report in client logs.
    pub report_id: Uuid,
    pub generated_at: Timestamp,
    /// Markup-stripped, redacted content the checks actually ran over.
    pub sanitized: String,
    pub compliance: ComplianceCheck,
    pub security: ValidationResult,
    /// 0-100, via the 20-point-per-category scorer.
    pub compliance_score: u8,
    pub security_risk: SecurityRisk,
    /// False when the scan found blocking errors or the compliance risk
    /// is critical; critical content is rejected regardless of score.
    pub publishable: bool,
}

/// Run the full validation pipeline over raw content.
///
/// Sanitization happens exactly once, up front, so redaction placeholders
/// rather than raw identifiers appear in any stored violation messages.
/// The compliance engine and security scanner then run independently over
/// the sanitized text.
pub fn validate_content(raw: &str) -> ContentReport {
    let sanitized = sanitize(raw);
    let compliance = check_compliance(&sanitized);
    let security = scan_security(&sanitized);

    let score = compliance_score(&compliance);
    let security_risk = security.security_risk.unwrap_or(SecurityRisk::Low);
    let publishable = security.errors.is_empty() && !compliance.risk_level.is_blocking();

    ContentReport {
        report_id: Uuid::new_v4(),
        generated_at: chrono::Utc::now(),
        sanitized,
        compliance,
        security,
        compliance_score: score,
        security_risk,
        publishable,
    }
}
