//! Practice email validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{SecurityRisk, ValidationResult};

/// Basic `local@domain.tld` shape; intentionally loose beyond that.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Throwaway domains rejected outright for practice accounts.
const DISPOSABLE_DOMAINS: &[&str] = &[
    "tempmail.org",
    "temp-mail.org",
    "guerrillamail.com",
    "10minutemail.com",
    "mailinator.com",
    "throwaway.email",
    "yopmail.com",
    "sharklasers.com",
];

/// Personal providers that draw an advisory to use a professional address.
const PERSONAL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "yahoo.com.au",
    "hotmail.com",
    "outlook.com",
];

/// Validate an email address for use on a healthcare practice account.
///
/// `sanitized_value` is always the trimmed, lowercased address,
/// regardless of pass/fail.
pub fn validate_healthcare_email(email: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    let normalized = email.trim().to_lowercase();
    result.sanitized_value = Some(normalized.clone());
    result.security_risk = Some(SecurityRisk::Low);

    if !EMAIL_RE.is_match(&normalized) {
        result.push_error("Invalid email address format");
        return result;
    }

    // Shape check passed, so the split cannot fail.
    let (local, domain) = normalized.split_once('@').unwrap_or(("", ""));

    if DISPOSABLE_DOMAINS.contains(&domain) {
        result.push_error(format!(
            "Disposable email domain '{domain}' is not accepted for practice accounts"
        ));
    }

    if PERSONAL_DOMAINS.contains(&domain) {
        result.push_warning(
            "Personal email domain; consider using a professional practice address",
        );
    }

    if local.contains('+') {
        result.push_warning("Address contains a plus-sign alias");
        result.security_risk = Some(SecurityRisk::Medium);
    }

    result
}
