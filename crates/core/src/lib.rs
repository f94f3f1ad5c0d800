//! AHPRA/TGA healthcare content compliance engine.
//!
//! Pure, synchronous validation logic for Australian healthcare marketing
//! and educational content: text sanitization, rule-based compliance
//! checking, security scanning, structured field validation (ABN, phone,
//! email, AHPRA registration), and report aggregation.
//!
//! Everything in the rule paths is a pure function over its inputs, with
//! no I/O or shared state, so the engine can be called concurrently from
//! any number of request handlers without coordination. The one async
//! piece, [`debounce::Debouncer`], is a thin scheduling wrapper for
//! live-editing callers and never touches the rule logic itself.

pub mod anonymize;
pub mod compliance;
pub mod debounce;
pub mod error;
pub mod fields;
pub mod realtime;
pub mod report;
pub mod sanitize;
pub mod schema;
pub mod security;
pub mod types;
