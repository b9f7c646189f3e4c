pub mod analysis;
pub mod chat;
pub mod error;

use axum::{Json, Router, extract::DefaultBodyLimit, http::StatusCode, routing::post};

use crate::domain::ErrorBody;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/analyze-personality",
            post(analysis::analyze_personality).fallback(method_not_allowed),
        )
        .route("/chat", post(chat::chat_handler).fallback(method_not_allowed))
        .fallback(not_found)
        // Posts lists have no size cap
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            error: "Method not allowed".to_string(),
            details: None,
        }),
    )
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_string(),
            details: None,
        }),
    )
}
