pub mod health;
pub mod validation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /compliance/check        rule-engine check
/// /content/validate        full report
/// /content/realtime        live-editing composition
/// /security/scan           injection scan
/// /fields/abn              ABN checksum
/// /fields/phone            phone classification
/// /fields/email            email validation
/// /fields/ahpra            registration format
/// /input/validate          structured-input schemas
/// /analytics/anonymize     payload anonymization
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/compliance", validation::compliance_router())
        .nest("/content", validation::content_router())
        .nest("/security", validation::security_router())
        .nest("/fields", validation::fields_router())
        .nest("/input", validation::input_router())
        .nest("/analytics", validation::analytics_router())
}
