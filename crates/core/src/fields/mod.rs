//! Structured-field validators for Australian healthcare practice data.
//!
//! Each validator is independent and reusable on its own: ABN checksum,
//! AHPRA registration format, Australian phone classification, and
//! practice email checks.

pub mod abn;
pub mod ahpra;
pub mod email;
pub mod phone;

pub use abn::validate_abn;
pub use ahpra::validate_ahpra_registration;
pub use email::validate_healthcare_email;
pub use phone::validate_australian_phone;
