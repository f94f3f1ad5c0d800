//! Handler for the `/analytics` resource: payload anonymization.

use axum::Json;
use practiceguard_core::anonymize::{anonymize, AnonymizationLevel};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::response::DataResponse;

/// Request body for the anonymization endpoint.
#[derive(Debug, Deserialize)]
pub struct AnonymizeBody {
    pub record: Map<String, Value>,
    pub level: AnonymizationLevel,
}

/// POST /api/v1/analytics/anonymize
///
/// Strip or redact identifying fields from an analytics record at the
/// requested level before it is forwarded off-practice.
pub async fn anonymize_record(
    Json(body): Json<AnonymizeBody>,
) -> AppResult<Json<DataResponse<Map<String, Value>>>> {
    Ok(Json(DataResponse {
        data: anonymize(&body.record, body.level),
    }))
}
