//! Route definitions for the validation resources.

use axum::routing::post;
use axum::Router;

use crate::handlers::{analytics, content, fields, input};
use crate::state::AppState;

/// Routes mounted at `/compliance`.
pub fn compliance_router() -> Router<AppState> {
    Router::new().route("/check", post(content::check))
}

/// Routes mounted at `/content`.
///
/// ```text
/// POST /validate  -> full content report
/// POST /realtime  -> live-editing validation
/// ```
pub fn content_router() -> Router<AppState> {
    Router::new()
        .route("/validate", post(content::validate))
        .route("/realtime", post(content::realtime))
}

/// Routes mounted at `/security`.
pub fn security_router() -> Router<AppState> {
    Router::new().route("/scan", post(content::scan))
}

/// Routes mounted at `/fields`.
///
/// ```text
/// POST /abn    -> ABN checksum
/// POST /phone  -> Australian phone classification
/// POST /email  -> practice email validation
/// POST /ahpra  -> registration format check
/// ```
pub fn fields_router() -> Router<AppState> {
    Router::new()
        .route("/abn", post(fields::abn))
        .route("/phone", post(fields::phone))
        .route("/email", post(fields::email))
        .route("/ahpra", post(fields::ahpra))
}

/// Routes mounted at `/input`.
pub fn input_router() -> Router<AppState> {
    Router::new().route("/validate", post(input::validate))
}

/// Routes mounted at `/analytics`.
pub fn analytics_router() -> Router<AppState> {
    Router::new().route("/anonymize", post(analytics::anonymize_record))
}
