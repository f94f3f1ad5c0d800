//! AHPRA/TGA advertising compliance rule engine.
//!
//! Rule term tables live in [`terms`] as immutable configuration data;
//! [`engine`] contains the matching, risk derivation, and scoring logic.

pub mod engine;
pub mod terms;

pub use engine::{check_compliance, compliance_score, ComplianceCheck};
