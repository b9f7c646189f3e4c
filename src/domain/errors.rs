//! Domain error types
//!
//! These errors are framework-agnostic and represent gateway-level failures.
//! The HTTP layer maps them to status codes in one place (`api::error`).

use thiserror::Error;

/// Client-caused input problem. Always reported as HTTP 400.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Body could not be decoded as JSON at all
    #[error("request body is not valid JSON: {0}")]
    MalformedBody(String),
    /// Body decoded but is not a JSON object
    #[error("request body must be a JSON object")]
    NotAnObject,
    /// Required field absent
    #[error("Missing '{0}' field")]
    MissingField(String),
    /// Field present with the wrong JSON type
    #[error("field '{field}' must be {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },
    /// Field present but empty after trimming
    #[error("field '{0}' must not be empty")]
    EmptyField(String),
}

/// Failure talking to the generative provider.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network / TLS / connection failure
    #[error("request to provider failed: {0}")]
    Transport(String),
    /// Provider answered with a non-success status
    #[error("provider returned {status}: {message}")]
    Provider { status: u16, message: String },
    /// Provider answered 2xx but the body could not be decoded
    #[error("could not decode provider response: {0}")]
    Decode(String),
    /// Provider refused the prompt
    #[error("provider blocked the prompt: {0}")]
    Blocked(String),
    /// Provider answered without any usable candidate text
    #[error("provider returned no content")]
    EmptyResponse,
}

/// Model output that could not be turned into the expected structure.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("model output is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("model output does not match the analysis schema: {0}")]
    Schema(String),
}

/// Every failure a gateway operation can produce.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl GatewayError {
    /// True for failures the caller caused (bad input)
    pub fn is_client_error(&self) -> bool {
        matches!(self, GatewayError::Validation(_))
    }
}
