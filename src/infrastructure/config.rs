use std::env;
use std::net::{IpAddr, Ipv4Addr};

use thiserror::Error;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8001;
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub host: IpAddr,
    pub port: u16,
    pub model: String,
    pub api_base: String,
    pub cors_allowed_origins: Vec<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the process environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_blank("GOOGLE_API_KEY").ok_or(ConfigError::Missing("GOOGLE_API_KEY"))?;

        let host: IpAddr = match non_blank("HOST") {
            Some(h) => h.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "HOST",
                value: h.clone(),
            })?,
            None => DEFAULT_HOST,
        };

        let port: u16 = match non_blank("PORT") {
            Some(p) => p.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: p.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key: api_key.trim().to_string(),
            host,
            port,
            model: non_blank("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_blank("GEMINI_API_BASE")
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            cors_allowed_origins: non_blank("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
        })
    }
}
