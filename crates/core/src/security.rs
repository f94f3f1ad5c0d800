//! Injection-pattern scanner for user-supplied content.
//!
//! Runs independently of the compliance engine. XSS-pattern matches are
//! blocking errors; SQL-metacharacter matches and excessive length are
//! non-blocking warnings. The result always carries the markup-stripped
//! content in `sanitized_value` so callers can render or store it even
//! when the scan fails.

use std::sync::LazyLock;

use regex::Regex;

use crate::sanitize::sanitize;
use crate::types::{SecurityRisk, ValidationResult};

/// Content longer than this triggers a performance advisory.
pub const LONG_CONTENT_THRESHOLD: usize = 10_000;

/// Fixed, ordered XSS pattern list. Scanning stops at the first match;
/// one finding is enough to block.
static XSS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?is)<script\b[^>]*>.*?</script>",
        r"(?i)<script\b",
        r"(?i)javascript:",
        r#"(?i)\bon\w+\s*=\s*["']?"#,
        r"(?i)<(?:iframe|object|embed)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// SQL keywords co-occurring with clause keywords.
static SQL_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\b(select|insert|update|delete|drop|union)\b.*\b(from|into|set|where)\b")
        .expect("valid regex")
});

/// Bare SQL metacharacters and comment markers.
static SQL_META_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"`;]|--|/\*|\*/"#).expect("valid regex"));

/// Scan content for injection-style patterns.
pub fn scan_security(content: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.sanitized_value = Some(sanitize(content));

    if XSS_PATTERNS.iter().any(|re| re.is_match(content)) {
        result.push_error("Potentially malicious content detected");
        result.security_risk = Some(SecurityRisk::High);
    }

    if SQL_KEYWORD_RE.is_match(content) || SQL_META_RE.is_match(content) {
        result.push_warning("Content contains SQL-like characters or keywords");
        // Errors take precedence for risk classification.
        if result.errors.is_empty() {
            result.security_risk = Some(SecurityRisk::Medium);
        }
    }

    if content.len() > LONG_CONTENT_THRESHOLD {
        result.push_warning("Content is very long and may impact performance");
    }

    if result.security_risk.is_none() {
        result.security_risk = Some(SecurityRisk::Low);
    }

    result
}
