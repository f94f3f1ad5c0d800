//! AHPRA registration number format checks.

use std::sync::LazyLock;

use regex::Regex;

/// Registration format: 3 uppercase profession letters + 10 digits,
/// e.g. `MED0001234567`.
pub static AHPRA_REGISTRATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}\d{10}$").expect("valid regex"));

/// Validate an AHPRA registration number.
///
/// The value is uppercase-normalized before the regex check; inputs
/// outside the 8–15 length window are rejected without running it.
pub fn validate_ahpra_registration(registration: &str) -> bool {
    let trimmed = registration.trim();
    if trimmed.len() < 8 || trimmed.len() > 15 {
        return false;
    }
    AHPRA_REGISTRATION_RE.is_match(&trimmed.to_uppercase())
}
