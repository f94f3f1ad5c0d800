//! Australian phone number classification and formatting.

use crate::types::ValidationResult;

/// The three recognised number shapes, checked in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhoneKind {
    Mobile,
    Landline,
    InternationalMobile,
}

/// Validate and canonicalize an Australian phone number.
///
/// All non-digits are stripped first, then the digits are classified
/// against three mutually exclusive shapes (first match wins):
///
/// - mobile: `04` + 8 digits, formatted `04 XX XXX XXX`
/// - landline: `0` + area digit 2–8 + 8 digits, formatted `0X XXXX XXXX`
/// - international mobile: `614` + 8 digits, formatted `+61 4XX XXX XXX`
///
/// On success `sanitized_value` holds the formatted number; on failure it
/// is the empty string.
pub fn validate_australian_phone(phone: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    match classify(&digits) {
        Some(kind) => {
            result.sanitized_value = Some(format_digits(&digits, kind));
        }
        None => {
            result.push_error("Invalid Australian phone number format");
            result.sanitized_value = Some(String::new());
        }
    }

    result
}

fn classify(digits: &str) -> Option<PhoneKind> {
    let bytes = digits.as_bytes();
    if digits.len() == 10 && digits.starts_with("04") {
        Some(PhoneKind::Mobile)
    } else if digits.len() == 10
        && bytes[0] == b'0'
        && (b'2'..=b'8').contains(&bytes[1])
    {
        Some(PhoneKind::Landline)
    } else if digits.len() == 11 && digits.starts_with("614") {
        Some(PhoneKind::InternationalMobile)
    } else {
        None
    }
}

fn format_digits(digits: &str, kind: PhoneKind) -> String {
    match kind {
        // 04 XX XXX XXX
        PhoneKind::Mobile => format!(
            "{} {} {} {}",
            &digits[0..2],
            &digits[2..4],
            &digits[4..7],
            &digits[7..10]
        ),
        // 0X XXXX XXXX
        PhoneKind::Landline => {
            format!("{} {} {}", &digits[0..2], &digits[2..6], &digits[6..10])
        }
        // +61 4XX XXX XXX
        PhoneKind::InternationalMobile => format!(
            "+61 {} {} {}",
            &digits[2..5],
            &digits[5..8],
            &digits[8..11]
        ),
    }
}
