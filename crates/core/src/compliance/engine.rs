//! Compliance matching, risk derivation, and scoring.

use serde::{Deserialize, Serialize};

use crate::types::RiskLevel;

use super::terms;

/// Points deducted from the compliance score per fired category.
const POINTS_PER_VIOLATION: u8 = 20;

/// Outcome of running the AHPRA rule engine over one piece of content.
///
/// `violations` holds exactly one message per category that fired (the
/// message itself lists every matched term); `suggestions` holds the
/// matching remediation hint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCheck {
    pub has_prohibited_terms: bool,
    pub has_therapeutic_claims: bool,
    pub has_patient_testimonials: bool,
    pub has_misleading_claims: bool,
    pub missing_disclaimers: bool,
    pub risk_level: RiskLevel,
    pub violations: Vec<String>,
    pub suggestions: Vec<String>,
    /// Whether a professional-boundary term matched. Feeds risk
    /// derivation alongside the testimonial flag.
    pub has_boundary_violations: bool,
}

/// Scan sanitized content against the AHPRA/TGA rule categories.
///
/// Deterministic and pure: identical input always yields an identical
/// check. Empty content returns all flags false with `RiskLevel::Low`.
pub fn check_compliance(content: &str) -> ComplianceCheck {
    let lowered = content.to_lowercase();

    let mut violations = Vec::new();
    let mut suggestions = Vec::new();

    let prohibited = terms::matched_terms(&lowered, terms::PROHIBITED_TERMS);
    let has_prohibited_terms = !prohibited.is_empty();
    if has_prohibited_terms {
        violations.push(category_violation(terms::PROHIBITED_LABEL, &prohibited));
        suggestions.push(terms::PROHIBITED_SUGGESTION.to_string());
    }

    let therapeutic = terms::matched_terms(&lowered, terms::THERAPEUTIC_CLAIM_TERMS);
    let has_therapeutic_claims = !therapeutic.is_empty();
    if has_therapeutic_claims {
        violations.push(category_violation(terms::THERAPEUTIC_LABEL, &therapeutic));
        suggestions.push(terms::THERAPEUTIC_SUGGESTION.to_string());
    }

    let testimonials = terms::matched_terms(&lowered, terms::TESTIMONIAL_INDICATOR_TERMS);
    let has_patient_testimonials = !testimonials.is_empty();
    if has_patient_testimonials {
        violations.push(category_violation(terms::TESTIMONIAL_LABEL, &testimonials));
        suggestions.push(terms::TESTIMONIAL_SUGGESTION.to_string());
    }

    let boundary = terms::matched_terms(&lowered, terms::BOUNDARY_VIOLATION_TERMS);
    let has_boundary_violations = !boundary.is_empty();
    if has_boundary_violations {
        violations.push(category_violation(terms::BOUNDARY_LABEL, &boundary));
        suggestions.push(terms::BOUNDARY_SUGGESTION.to_string());
    }

    // Fifth category: advice-giving content without a disclaimer.
    let gives_advice = terms::ADVICE_TERMS.iter().any(|t| lowered.contains(t));
    let has_disclaimer = terms::DISCLAIMER_TERMS.iter().any(|t| lowered.contains(t));
    let missing_disclaimers = gives_advice && !has_disclaimer;
    if missing_disclaimers {
        violations.push("Advice-giving content is missing a medical disclaimer".to_string());
        suggestions.push(format!(
            "Add a disclaimer, e.g.: \"{}\"",
            terms::RECOMMENDED_DISCLAIMER
        ));
    }

    // Priority derivation, first match wins, not a weighted sum.
    let risk_level = if has_patient_testimonials || has_boundary_violations {
        RiskLevel::Critical
    } else if has_therapeutic_claims || missing_disclaimers {
        RiskLevel::High
    } else if has_prohibited_terms {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    ComplianceCheck {
        has_prohibited_terms,
        has_therapeutic_claims,
        has_patient_testimonials,
        has_misleading_claims: has_prohibited_terms || has_therapeutic_claims,
        missing_disclaimers,
        risk_level,
        violations,
        suggestions,
        has_boundary_violations,
    }
}

/// Compliance score for a completed check: 100 minus 20 points per fired
/// category, floored at 0.
///
/// Distinct from the real-time scorer, which deducts 25 points per error
/// entry. Both constants are load-bearing for downstream consumers.
pub fn compliance_score(check: &ComplianceCheck) -> u8 {
    let deduction = (check.violations.len() as u32) * u32::from(POINTS_PER_VIOLATION);
    100u32.saturating_sub(deduction) as u8
}

fn category_violation(label: &str, matched: &[&str]) -> String {
    format!("{label}: {}", matched.join(", "))
}
