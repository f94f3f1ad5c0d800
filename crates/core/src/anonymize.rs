//! Analytics payload anonymization.
//!
//! Level-specific field dropping and redaction applied to records before
//! they leave the practice boundary. Pure data transform, independent of
//! the validators.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::sanitize::sanitize;

/// Direct identifiers removed at every level.
const DIRECT_IDENTIFIERS: &[&str] = &[
    "name",
    "firstName",
    "lastName",
    "email",
    "phone",
    "address",
    "dateOfBirth",
    "medicareNumber",
];

/// The only fields retained at `Maximum`.
const AGGREGATE_WHITELIST: &[&str] = &["ageBand", "state", "appointmentType", "patientType"];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnonymizationLevel {
    Basic,
    Enhanced,
    Maximum,
}

/// Anonymize an analytics record at the requested level.
///
/// - `Basic` drops direct identifiers.
/// - `Enhanced` additionally redacts every remaining free-text field
///   through the sanitizer and truncates `postcode` to its first two
///   digits (region granularity).
/// - `Maximum` keeps only the aggregate whitelist.
pub fn anonymize(record: &Map<String, Value>, level: AnonymizationLevel) -> Map<String, Value> {
    match level {
        AnonymizationLevel::Basic => record
            .iter()
            .filter(|(key, _)| !DIRECT_IDENTIFIERS.contains(&key.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        AnonymizationLevel::Enhanced => record
            .iter()
            .filter(|(key, _)| !DIRECT_IDENTIFIERS.contains(&key.as_str()))
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) if key == "postcode" => {
                        Value::String(s.chars().take(2).collect())
                    }
                    Value::String(s) => Value::String(sanitize(s)),
                    other => other.clone(),
                };
                (key.clone(), value)
            })
            .collect(),
        AnonymizationLevel::Maximum => record
            .iter()
            .filter(|(key, _)| AGGREGATE_WHITELIST.contains(&key.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    }
}
