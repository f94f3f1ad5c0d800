//! Handlers for the `/fields` resource: structured field validation.

use axum::Json;
use practiceguard_core::fields::{
    validate_abn, validate_ahpra_registration, validate_australian_phone,
    validate_healthcare_email,
};
use practiceguard_core::types::ValidationResult;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;

#[derive(Debug, Deserialize)]
pub struct AbnBody {
    pub abn: String,
}

#[derive(Debug, Deserialize)]
pub struct PhoneBody {
    pub phone: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailBody {
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationBody {
    pub registration_number: String,
}

/// Boolean outcome for the checks that have no richer result shape.
#[derive(Debug, Serialize)]
pub struct FlagResponse {
    pub valid: bool,
}

/// POST /api/v1/fields/abn
///
/// ABN checksum validation.
pub async fn abn(Json(body): Json<AbnBody>) -> AppResult<Json<DataResponse<FlagResponse>>> {
    Ok(Json(DataResponse {
        data: FlagResponse {
            valid: validate_abn(body.abn.trim()),
        },
    }))
}

/// POST /api/v1/fields/phone
///
/// Australian phone classification; `sanitizedValue` carries the
/// canonical formatting on success.
pub async fn phone(Json(body): Json<PhoneBody>) -> AppResult<Json<DataResponse<ValidationResult>>> {
    Ok(Json(DataResponse {
        data: validate_australian_phone(&body.phone),
    }))
}

/// POST /api/v1/fields/email
///
/// Practice email validation with disposable-domain and personal-domain
/// checks.
pub async fn email(Json(body): Json<EmailBody>) -> AppResult<Json<DataResponse<ValidationResult>>> {
    Ok(Json(DataResponse {
        data: validate_healthcare_email(&body.email),
    }))
}

/// POST /api/v1/fields/ahpra
///
/// AHPRA registration number format check.
pub async fn ahpra(
    Json(body): Json<RegistrationBody>,
) -> AppResult<Json<DataResponse<FlagResponse>>> {
    Ok(Json(DataResponse {
        data: FlagResponse {
            valid: validate_ahpra_registration(&body.registration_number),
        },
    }))
}
