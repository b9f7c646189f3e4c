//! Persona Service - Gateway logic without the HTTP layer
//!
//! Takes requests that already passed validation, renders the prompt, calls
//! the model client and shapes the result.

use std::sync::Arc;

use crate::domain::extraction::extract_analysis_response;
use crate::domain::prompts::{build_analysis_prompt, build_chat_prompt};
use crate::domain::{
    AnalysisRequest, AnalysisResponse, ChatReply, ChatRequest, GatewayError, GenerationMode,
    ModelClient,
};

/// Runs validated requests through prompt rendering, the model and extraction.
#[derive(Clone)]
pub struct PersonaService {
    client: Arc<dyn ModelClient>,
}

impl PersonaService {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, GatewayError> {
        let prompt = build_analysis_prompt(request);
        tracing::debug!(
            "Analyzing {} posts for user {}",
            request.posts.len(),
            request.user_id
        );

        let raw = self
            .client
            .generate(&prompt, GenerationMode::Structured)
            .await?;

        Ok(extract_analysis_response(&raw)?)
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, GatewayError> {
        let prompt = build_chat_prompt(request);

        let raw = self
            .client
            .generate(&prompt, GenerationMode::FreeForm)
            .await?;

        Ok(ChatReply {
            reply: raw.trim().to_string(),
        })
    }
}
