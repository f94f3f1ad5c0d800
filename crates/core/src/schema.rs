//! Comprehensive structured-input validation.
//!
//! Applies per-type field schemas to JSON objects submitted from the
//! practice dashboard forms, layering the compliance engine and security
//! scanner on top. All messages are field-qualified so the UI can attach
//! them to the right form control.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::compliance::{check_compliance, compliance_score};
use crate::fields::{validate_abn, validate_ahpra_registration};
use crate::sanitize::sanitize;
use crate::security::scan_security;
use crate::types::{SecurityRisk, ValidationResult};

/// The structured form types accepted by [`validate_healthcare_input`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    AhpraRegistration,
    PracticeDetails,
    PatientContent,
    TeamMember,
    AppointmentInfo,
}

/// Australian states and territories accepted for `practiceState`.
pub const AU_STATES: &[&str] = &["NSW", "VIC", "QLD", "SA", "WA", "TAS", "NT", "ACT"];

static POSTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("valid regex"));

static PRACTICE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s\-&.,()]+$").expect("valid regex"));

static PERSON_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s\-']+$").expect("valid regex"));

/// Validate a structured input object against the schema for `input_type`.
///
/// Never panics for ordinary invalid input; internal panics from nested
/// checks are caught at this boundary and surfaced as a single generic
/// error with `SecurityRisk::High` so callers need no exception handling
/// around the public API.
pub fn validate_healthcare_input(
    input: &Map<String, Value>,
    input_type: InputType,
    check_content_compliance: bool,
) -> ValidationResult {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        validate_input_inner(input, input_type, check_content_compliance)
    }));

    match outcome {
        Ok(result) => result,
        Err(_) => {
            let mut result = ValidationResult::new();
            result.push_error("Validation failed due to an internal error");
            result.security_risk = Some(SecurityRisk::High);
            result
        }
    }
}

fn validate_input_inner(
    input: &Map<String, Value>,
    input_type: InputType,
    check_content_compliance: bool,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    // Schema transform: every text-bearing field is sanitized before any
    // further check runs.
    let sanitized_input = sanitize_string_fields(input);

    match input_type {
        InputType::AhpraRegistration => validate_ahpra_form(&sanitized_input, &mut result),
        InputType::PracticeDetails => validate_practice_form(&sanitized_input, &mut result),
        InputType::PatientContent => {
            validate_content_form(&sanitized_input, check_content_compliance, &mut result)
        }
        InputType::TeamMember => validate_team_form(&sanitized_input, &mut result),
        InputType::AppointmentInfo => validate_appointment_form(&sanitized_input, &mut result),
    }

    scan_string_fields(&sanitized_input, &mut result);

    if result.security_risk.is_none() {
        result.security_risk = Some(SecurityRisk::Low);
    }

    result
}

/// Return a copy of the object with all string values passed through the
/// sanitizer.
fn sanitize_string_fields(input: &Map<String, Value>) -> Map<String, Value> {
    input
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => Value::String(sanitize(s)),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// Run the security scanner over every string field, appending
/// field-qualified findings and escalating the overall risk.
fn scan_string_fields(input: &Map<String, Value>, result: &mut ValidationResult) {
    for (field, value) in input {
        let Value::String(text) = value else { continue };
        let scan = scan_security(text);
        for error in scan.errors {
            result.push_error(format!("{field}: {error}"));
        }
        for warning in scan.warnings {
            result.push_warning(format!("{field}: {warning}"));
        }
        if let Some(risk) = scan.security_risk {
            if result.security_risk.is_none_or(|current| risk > current) {
                result.security_risk = Some(risk);
            }
        }
    }
}

// ── Per-type schemas ─────────────────────────────────────────────────

fn validate_ahpra_form(input: &Map<String, Value>, result: &mut ValidationResult) {
    if let Some(registration) = require_string(input, "registrationNumber", result) {
        if !validate_ahpra_registration(&registration) {
            result.push_error(
                "registrationNumber: must be 3 letters followed by 10 digits (e.g. MED0001234567)",
            );
        }
    }

    require_string(input, "profession", result);

    if let Some(state) = require_string(input, "practiceState", result) {
        if !AU_STATES.contains(&state.to_uppercase().as_str()) {
            result.push_error("practiceState: must be an Australian state or territory code");
        }
    }

    if let Some(postcode) = require_string(input, "practicePostcode", result) {
        let in_range = POSTCODE_RE.is_match(&postcode)
            && postcode
                .parse::<u32>()
                .is_ok_and(|n| (1000..=9999).contains(&n));
        if !in_range {
            result.push_error("practicePostcode: must be a 4-digit postcode between 1000 and 9999");
        }
    }
}

fn validate_practice_form(input: &Map<String, Value>, result: &mut ValidationResult) {
    if let Some(name) = require_string(input, "practiceName", result) {
        if !(2..=100).contains(&name.chars().count()) {
            result.push_error("practiceName: must be between 2 and 100 characters");
        } else if !PRACTICE_NAME_RE.is_match(&name) {
            result.push_error("practiceName: contains unsupported characters");
        }
    }

    if let Some(abn) = require_string(input, "abn", result) {
        if !validate_abn(&abn) {
            result.push_error("abn: failed ABN checksum validation");
        }
    }

    require_string(input, "practiceType", result);

    match input.get("servicesOffered") {
        Some(Value::Array(services)) if !services.is_empty() => {}
        Some(Value::Array(_)) => {
            result.push_error("servicesOffered: at least one service is required")
        }
        _ => result.push_error("servicesOffered: field is required"),
    }
}

fn validate_content_form(
    input: &Map<String, Value>,
    check_content_compliance: bool,
    result: &mut ValidationResult,
) {
    if let Some(title) = require_string(input, "title", result) {
        if !(5..=200).contains(&title.chars().count()) {
            result.push_error("title: must be between 5 and 200 characters");
        }
    }

    let content = require_string(input, "content", result);
    if let Some(ref content) = content {
        if !(10..=5000).contains(&content.chars().count()) {
            result.push_error("content: must be between 10 and 5000 characters");
        }
    }

    require_string(input, "contentType", result);
    require_string(input, "targetAudience", result);

    for flag in ["medicalDisclaimer", "ahpraCompliant"] {
        if input.get(flag).and_then(Value::as_bool) != Some(true) {
            result.push_error(format!("{flag}: must be explicitly confirmed"));
        }
    }

    if check_content_compliance {
        if let Some(content) = content {
            let check = check_compliance(&content);
            for violation in &check.violations {
                result.push_error(format!("content: {violation}"));
            }
            result.compliance_score = Some(compliance_score(&check));
            // Critical risk hard-blocks independently of the score.
            if check.risk_level.is_blocking() {
                result.push_error(
                    "content: blocked; testimonial or professional-boundary content \
                     cannot be published under AHPRA guidelines",
                );
            }
        }
    }
}

fn validate_team_form(input: &Map<String, Value>, result: &mut ValidationResult) {
    if let Some(email) = require_string(input, "email", result) {
        if email.contains('+') {
            result.push_error("email: plus-sign aliases are not allowed for team accounts");
        }
    }

    require_string(input, "role", result);

    match input.get("permissions") {
        Some(Value::Array(_)) => {}
        _ => result.push_error("permissions: field is required"),
    }

    for field in ["firstName", "lastName"] {
        if let Some(name) = require_string(input, field, result) {
            if !(2..=50).contains(&name.chars().count()) {
                result.push_error(format!("{field}: must be between 2 and 50 characters"));
            } else if !PERSON_NAME_RE.is_match(&name) {
                result.push_error(format!(
                    "{field}: only letters, spaces, hyphens and apostrophes are allowed"
                ));
            }
        }
    }
}

fn validate_appointment_form(input: &Map<String, Value>, result: &mut ValidationResult) {
    require_string(input, "patientType", result);
    require_string(input, "appointmentType", result);

    match input.get("duration").and_then(Value::as_i64) {
        Some(minutes) if (5..=240).contains(&minutes) => {}
        Some(_) => result.push_error("duration: must be between 5 and 240 minutes"),
        None => result.push_error("duration: must be a whole number of minutes"),
    }
}

/// Fetch a required, non-empty string field, recording an error when it
/// is missing or blank. Returns the value on success.
fn require_string(
    input: &Map<String, Value>,
    field: &str,
    result: &mut ValidationResult,
) -> Option<String> {
    match input.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::String(_)) => {
            result.push_error(format!("{field}: field must not be empty"));
            None
        }
        Some(_) => {
            result.push_error(format!("{field}: field must be a string"));
            None
        }
        None => {
            result.push_error(format!("{field}: field is required"));
            None
        }
    }
}
