//! Model client trait definition
//!
//! The provider-backed implementation lives in the infrastructure layer.

use async_trait::async_trait;

use super::UpstreamError;

/// How the provider should shape its output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Ask the provider to constrain output to JSON
    Structured,
    /// No output constraint
    FreeForm,
}

/// A single stateless text-generation call.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send `prompt` and return the raw generated text
    async fn generate(&self, prompt: &str, mode: GenerationMode) -> Result<String, UpstreamError>;
}
