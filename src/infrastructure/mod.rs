//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - The Gemini-backed model client (gemini_client)
//! - HTTP server setup (server)
//! - Application state (state)

pub mod config;
pub mod gemini_client;
pub mod server;
pub mod state;

pub use gemini_client::GeminiClient;
pub use state::AppState;
