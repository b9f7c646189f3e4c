//! Domain layer - Pure gateway logic
//!
//! This layer contains NO framework dependencies (no Axum, no reqwest).
//! Only data contracts, validation, prompt templates, extraction and the
//! model client trait.

pub mod errors;
pub mod extraction;
pub mod model_client;
pub mod models;
pub mod prompts;
pub mod validation;

pub use errors::{ExtractionError, GatewayError, UpstreamError, ValidationError};
pub use model_client::{GenerationMode, ModelClient};
pub use models::*;
