//! Shared result types for all validators.

use serde::{Deserialize, Serialize};

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Security risk classification attached to scan results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SecurityRisk {
    Low,
    Medium,
    High,
}

/// Categorical compliance risk, derived from which rule categories fired.
///
/// Independent of the numeric compliance score: `Critical` content must be
/// rejected for publication regardless of how the score works out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Whether content at this risk level is blocked from publication.
    pub fn is_blocking(self) -> bool {
        matches!(self, RiskLevel::Critical)
    }
}

/// Outcome of a single validation operation.
///
/// Invariant: `is_valid == errors.is_empty()`. Build results through
/// [`ValidationResult::new`] plus the push helpers so the flag can never
/// drift from the error list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_risk: Option<SecurityRisk>,
}

impl ValidationResult {
    /// An empty, passing result with no optional fields set.
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            sanitized_value: None,
            compliance_score: None,
            security_risk: None,
        }
    }

    /// Append a blocking error and clear `is_valid`.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.is_valid = false;
    }

    /// Append a non-blocking advisory.
    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}
