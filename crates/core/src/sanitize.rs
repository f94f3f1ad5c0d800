//! Plain-text sanitizer applied before any rule matching.
//!
//! Strips markup, normalizes whitespace, and redacts sensitive numeric
//! patterns so that redaction placeholders, never raw identifiers,
//! appear in stored violation messages.

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder substituted for card-number-like sequences.
pub const CARD_PLACEHOLDER: &str = "[CARD REDACTED]";
/// Placeholder substituted for government-ID-like sequences.
pub const ID_PLACEHOLDER: &str = "[ID REDACTED]";
/// Placeholder substituted for Medicare number references.
pub const MEDICARE_PLACEHOLDER: &str = "[MEDICARE REDACTED]";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("valid regex"));

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// 4 groups of 4 digits, optional `-` or space separators.
static CARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b").expect("valid regex")
});

/// 3-2-4 digit grouping, optional `-` or space separators.
static GOV_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{3}[-\s]?\d{2}[-\s]?\d{4}\b").expect("valid regex"));

static MEDICARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)medicare\s*#?\s*\d+").expect("valid regex"));

/// Sanitize free text to plain, redacted form.
///
/// Processing order matters: markup is stripped first (so redaction sees
/// the rendered text), whitespace is collapsed second, and numeric
/// redaction runs last. The placeholders contain no digits or markup, so
/// the function is idempotent.
pub fn sanitize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Strip tags repeatedly: removing `<b>` from `<<b>>` exposes `<>`,
    // which must not survive.
    let mut stripped = text.to_string();
    while TAG_RE.is_match(&stripped) {
        stripped = TAG_RE.replace_all(&stripped, "").into_owned();
    }

    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    let trimmed = collapsed.trim();

    // Card redaction must run before the government-ID pattern, which
    // would otherwise match inside an unseparated 16-digit run.
    let redacted = CARD_RE.replace_all(trimmed, CARD_PLACEHOLDER);
    let redacted = GOV_ID_RE.replace_all(&redacted, ID_PLACEHOLDER);
    let redacted = MEDICARE_RE.replace_all(&redacted, MEDICARE_PLACEHOLDER);

    redacted.into_owned()
}
