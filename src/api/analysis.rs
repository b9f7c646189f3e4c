use axum::{Json, body::Bytes, extract::State};

use crate::api::error::{ApiError, Endpoint};
use crate::domain::validation::{parse_body, validate_analysis_request};
use crate::domain::{AnalysisResponse, ValidationError};
use crate::services::PersonaService;

#[utoipa::path(
    post,
    path = "/analyze-personality",
    request_body = crate::domain::AnalysisRequest,
    responses(
        (status = 200, description = "Personality tags and theme", body = AnalysisResponse),
        (status = 400, description = "Malformed request body", body = crate::domain::ErrorBody),
        (status = 500, description = "Provider or extraction failure", body = crate::domain::ErrorBody)
    )
)]
pub async fn analyze_personality(
    State(persona): State<PersonaService>,
    body: Bytes,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let err = |e: ValidationError| ApiError::new(Endpoint::AnalyzePersonality, e);

    let raw = parse_body(&body).map_err(err)?;
    let request = validate_analysis_request(&raw).map_err(err)?;

    let response = persona
        .analyze(&request)
        .await
        .map_err(|e| ApiError::new(Endpoint::AnalyzePersonality, e))?;

    Ok(Json(response))
}
