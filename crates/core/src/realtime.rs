//! Real-time content validation for live editing surfaces.
//!
//! Composes the compliance engine and the security scanner into one flat
//! issue list suitable for display beside an editor. The caller (a UI
//! layer) is expected to debounce invocations; see [`crate::debounce`].

use serde::{Deserialize, Serialize};

use crate::compliance::check_compliance;
use crate::security::scan_security;

/// Points deducted from the real-time score per error-level issue.
///
/// Deliberately different from the 20-point-per-category constant used by
/// [`crate::compliance::compliance_score`]; the two scorers are separate
/// behaviors and both are depended on by fixtures.
const POINTS_PER_ERROR: u32 = 25;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
}

/// One entry in the live issue list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
}

/// Result of one real-time validation pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeValidation {
    pub is_compliant: bool,
    pub issues: Vec<Issue>,
    pub score: u8,
}

/// Run the compliance engine and security scanner over `content` and
/// merge their findings into a single ordered issue list.
///
/// Issue order is fixed: compliance violations (errors), compliance
/// suggestions (warnings), security errors, security warnings.
pub fn validate_content_realtime(content: &str) -> RealtimeValidation {
    let compliance = check_compliance(content);
    let security = scan_security(content);

    let mut issues = Vec::new();
    for message in compliance.violations {
        issues.push(Issue {
            kind: IssueKind::Error,
            message,
        });
    }
    for message in compliance.suggestions {
        issues.push(Issue {
            kind: IssueKind::Warning,
            message,
        });
    }
    for message in security.errors {
        issues.push(Issue {
            kind: IssueKind::Error,
            message,
        });
    }
    for message in security.warnings {
        issues.push(Issue {
            kind: IssueKind::Warning,
            message,
        });
    }

    let error_count = issues
        .iter()
        .filter(|i| i.kind == IssueKind::Error)
        .count() as u32;

    RealtimeValidation {
        is_compliant: error_count == 0,
        score: 100u32.saturating_sub(error_count * POINTS_PER_ERROR) as u8,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_content_scores_full_marks() {
        let result = validate_content_realtime("General wellbeing information.");
        assert!(result.is_compliant);
        assert!(result.issues.is_empty());
        assert_eq!(result.score, 100);
    }

    #[test]
    fn score_deducts_twenty_five_per_error() {
        // One compliance category fired -> one error -> 75.
        let result = validate_content_realtime("a painless visit");
        assert_eq!(
            result
                .issues
                .iter()
                .filter(|i| i.kind == IssueKind::Error)
                .count(),
            1
        );
        assert_eq!(result.score, 75);
        assert!(!result.is_compliant);
    }

    #[test]
    fn four_errors_floor_the_score() {
        let result = validate_content_realtime(
            "miracle cures, read the testimonial about our friendship \
             <script>alert(1)</script>",
        );
        let errors = result
            .issues
            .iter()
            .filter(|i| i.kind == IssueKind::Error)
            .count();
        assert!(errors >= 4, "expected at least 4 errors, got {errors}");
        assert_eq!(result.score, 0);
    }

    #[test]
    fn issue_order_is_violations_then_suggestions_then_security() {
        let result =
            validate_content_realtime("a painless visit; <script>x</script>");
        let kinds: Vec<IssueKind> = result.issues.iter().map(|i| i.kind).collect();
        // prohibited violation (error), its suggestion (warning),
        // XSS error, SQL-metacharacter warning.
        assert_eq!(
            kinds,
            vec![
                IssueKind::Error,
                IssueKind::Warning,
                IssueKind::Error,
                IssueKind::Warning,
            ]
        );
        assert!(result.issues[0].message.contains("painless"));
        assert_eq!(result.issues[2].message, "Potentially malicious content detected");
    }

    #[test]
    fn security_warnings_do_not_affect_compliance() {
        let result = validate_content_realtime("O'Brien family practice");
        assert!(result.is_compliant);
        assert_eq!(result.score, 100);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::Warning);
    }
}
