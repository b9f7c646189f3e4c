//! Central mapping from gateway errors to HTTP responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::{ErrorBody, GatewayError};

/// Which route produced the error; decides the headline of the error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    AnalyzePersonality,
    Chat,
}

#[derive(Debug)]
pub struct ApiError {
    pub endpoint: Endpoint,
    pub source: GatewayError,
}

impl ApiError {
    pub fn new(endpoint: Endpoint, source: impl Into<GatewayError>) -> Self {
        Self {
            endpoint,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.source {
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::Upstream(_) | GatewayError::Extraction(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn body(&self) -> ErrorBody {
        let details = Some(self.source.to_string());
        match (&self.source, self.endpoint) {
            (GatewayError::Validation(_), Endpoint::AnalyzePersonality) => ErrorBody {
                error: "Invalid request body".to_string(),
                details,
            },
            (GatewayError::Validation(e), Endpoint::Chat) => ErrorBody {
                error: e.to_string(),
                details: None,
            },
            (_, Endpoint::AnalyzePersonality) => ErrorBody {
                error: "Failed to process AI request".to_string(),
                details,
            },
            (_, Endpoint::Chat) => ErrorBody {
                error: "Failed to process chat".to_string(),
                details,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.source.is_client_error() {
            tracing::debug!("Rejected {:?} request: {}", self.endpoint, self.source);
        } else {
            tracing::error!("{:?} failed: {}", self.endpoint, self.source);
        }

        (self.status(), Json(self.body())).into_response()
    }
}
