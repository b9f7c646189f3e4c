use crate::api;
use crate::domain;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(api::analysis::analyze_personality, api::chat::chat_handler),
    components(schemas(
        domain::AnalysisRequest,
        domain::AnalysisResponse,
        domain::ChatRequest,
        domain::ChatReply,
        domain::ErrorBody
    )),
    tags(
        (name = "persona-gateway", description = "Personality analysis and chat over Gemini")
    )
)]
pub struct ApiDoc;

/// Pretty-printed OpenAPI document for both routes
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}
