//! Gemini `generateContent` client
//!
//! No timeout and no retries: a slow provider holds the request open, a
//! failed call is reported once.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{GenerationMode, ModelClient, UpstreamError};
use crate::infrastructure::config::Config;

const API_KEY_HEADER: &str = "x-goog-api-key";
const JSON_MIME_TYPE: &str = "application/json";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

/// A model advertised by the provider
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(rename = "supportedGenerationMethods", default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn supports_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == "generateContent")
    }
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        let api_base: String = api_base.into();
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_key, &config.model, &config.api_base)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }

    /// List every model the key can see, following pagination.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, UpstreamError> {
        let url = format!("{}/v1beta/models", self.api_base);
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut req = self.client.get(&url).header(API_KEY_HEADER, &self.api_key);
            if let Some(token) = &page_token {
                req = req.query(&[("pageToken", token)]);
            }

            let resp = req
                .send()
                .await
                .map_err(|e| UpstreamError::Transport(e.to_string()))?;
            let page: ListModelsResponse = read_json(resp).await?;

            models.extend(page.models);
            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(models)
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, prompt: &str, mode: GenerationMode) -> Result<String, UpstreamError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: match mode {
                GenerationMode::Structured => Some(GenerationConfig {
                    response_mime_type: JSON_MIME_TYPE,
                }),
                GenerationMode::FreeForm => None,
            },
        };

        let resp = self
            .client
            .post(self.generate_url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let parsed: GenerateContentResponse = read_json(resp).await?;
        let text = candidate_text(parsed)?;

        Ok(match mode {
            GenerationMode::Structured => text,
            GenerationMode::FreeForm => text.trim().to_string(),
        })
    }
}

/// Turn a provider response into `T`, or into an error carrying the
/// provider's own message.
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, UpstreamError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| UpstreamError::Transport(format!("Failed to read response body: {}", e)))?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|env| env.error.message)
            .unwrap_or(body);
        return Err(UpstreamError::Provider {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| UpstreamError::Decode(e.to_string()))
}

/// Concatenate the text parts of the first candidate.
fn candidate_text(resp: GenerateContentResponse) -> Result<String, UpstreamError> {
    let block_reason = resp.prompt_feedback.and_then(|f| f.block_reason);

    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect::<String>())
        .unwrap_or_default();

    if !text.is_empty() {
        return Ok(text);
    }

    match block_reason {
        Some(reason) => Err(UpstreamError::Blocked(reason)),
        None => Err(UpstreamError::EmptyResponse),
    }
}
