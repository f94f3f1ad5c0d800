/// Domain error type for the compliance engine.
///
/// Ordinary invalid input never produces an `Err`; validators return
/// result values with `is_valid = false` instead. These variants cover
/// the cases where a caller violated an API contract or an internal
/// check failed unexpectedly.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
