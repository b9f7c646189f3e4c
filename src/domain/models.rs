use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Posts to profile, as accepted by `/analyze-personality`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRequest {
    pub user_id: String,
    pub posts: Vec<String>,
}

/// Profile derived from a user's posts.
///
/// The prompt asks for 3-5 tags; the count is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    pub personality_tags: Vec<String>,
    pub suggested_theme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub reply: String,
}

/// Error body returned by both routes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
