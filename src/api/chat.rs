use axum::{Json, body::Bytes, extract::State};

use crate::api::error::{ApiError, Endpoint};
use crate::domain::validation::{parse_body, validate_chat_request};
use crate::domain::{ChatReply, ValidationError};
use crate::services::PersonaService;

#[utoipa::path(
    post,
    path = "/chat",
    request_body = crate::domain::ChatRequest,
    responses(
        (status = 200, description = "Model reply", body = ChatReply),
        (status = 400, description = "Missing or blank message", body = crate::domain::ErrorBody),
        (status = 500, description = "Provider failure", body = crate::domain::ErrorBody)
    )
)]
pub async fn chat_handler(
    State(persona): State<PersonaService>,
    body: Bytes,
) -> Result<Json<ChatReply>, ApiError> {
    let err = |e: ValidationError| ApiError::new(Endpoint::Chat, e);

    let raw = parse_body(&body).map_err(err)?;
    let request = validate_chat_request(&raw).map_err(err)?;

    let reply = persona
        .chat(&request)
        .await
        .map_err(|e| ApiError::new(Endpoint::Chat, e))?;

    Ok(Json(reply))
}
