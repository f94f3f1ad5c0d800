//! Handler for the `/input` resource: comprehensive structured-input
//! validation.

use axum::Json;
use practiceguard_core::schema::{validate_healthcare_input, InputType};
use practiceguard_core::types::ValidationResult;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::response::DataResponse;

/// Request body for the structured-input validation endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateInputBody {
    pub input: Map<String, Value>,
    #[serde(rename = "type")]
    pub input_type: InputType,
    #[serde(default)]
    pub check_compliance: bool,
}

/// POST /api/v1/input/validate
///
/// Apply the schema for the given input type, plus the compliance engine
/// for patient content when requested. Validation failures are returned
/// in the result body, never as HTTP errors.
pub async fn validate(
    Json(body): Json<ValidateInputBody>,
) -> AppResult<Json<DataResponse<ValidationResult>>> {
    let result = validate_healthcare_input(&body.input, body.input_type, body.check_compliance);
    Ok(Json(DataResponse { data: result }))
}
