//! Application state containing the model-backed service

use std::sync::Arc;

use crate::domain::ModelClient;
use crate::services::PersonaService;

/// Application state shared across all handlers.
///
/// Built once before the server starts and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub persona: PersonaService,
}

impl AppState {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self {
            persona: PersonaService::new(client),
        }
    }
}

impl axum::extract::FromRef<AppState> for PersonaService {
    fn from_ref(state: &AppState) -> Self {
        state.persona.clone()
    }
}
