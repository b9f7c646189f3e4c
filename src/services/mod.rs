//! Services Layer
//!
//! This module contains the gateway logic extracted from HTTP handlers.

pub mod persona_service;

// Re-export for convenience
pub use persona_service::PersonaService;
