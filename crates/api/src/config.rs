//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `OPENROUTER_API_KEY` - AI provider API key
//!
//! ## Optional
//! - `DASTAK_HOST` - Bind address (default: 127.0.0.1)
//! - `DASTAK_PORT` - Listen port (default: 5000)
//! - `OPENROUTER_MODEL` - Model ID (default: deepseek/deepseek-r1:free)
//! - `OPENROUTER_BASE_URL` - Provider base URL (default: https://openrouter.ai/api/v1)
//! - `AI_TIMEOUT_SECS` - Provider request timeout in seconds (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_MODEL: &str = "deepseek/deepseek-r1:free";
const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// AI provider configuration
    pub ai: AiConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// AI provider configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct AiConfig {
    /// Provider API key
    pub api_key: SecretString,
    /// Model ID (e.g., deepseek/deepseek-r1:free)
    pub model: String,
    /// Provider base URL (OpenAI-compatible)
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("DASTAK_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("DASTAK_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("DASTAK_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("DASTAK_PORT".to_string(), e.to_string()))?;

        let ai = AiConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            ai,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = SecretString::from(get_required_env("OPENROUTER_API_KEY")?);
        let model = get_env_or_default("OPENROUTER_MODEL", DEFAULT_MODEL);

        let base_url = get_env_or_default("OPENROUTER_BASE_URL", DEFAULT_BASE_URL);
        url::Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("OPENROUTER_BASE_URL".to_string(), e.to_string())
        })?;

        let timeout_secs = get_env_or_default("AI_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("AI_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
