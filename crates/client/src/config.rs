//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LINKPAGE_API_URL` - Base URL of the Linkpage REST API (required for remote operations)
//! - `LINKPAGE_API_TOKEN` - Bearer token; overrides the persisted session token
//! - `LINKPAGE_STATE_DIR` - Directory for persisted store snapshots (default: .linkpage)
//! - `LINKPAGE_HTTP_TIMEOUT_SECS` - HTTP request timeout in seconds (default: 10)

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const API_URL_VAR: &str = "LINKPAGE_API_URL";
const API_TOKEN_VAR: &str = "LINKPAGE_API_TOKEN";
const STATE_DIR_VAR: &str = "LINKPAGE_STATE_DIR";
const HTTP_TIMEOUT_VAR: &str = "LINKPAGE_HTTP_TIMEOUT_SECS";

const DEFAULT_STATE_DIR: &str = ".linkpage";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
///
/// Implements `Debug` manually to redact the API token.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API
    pub api_url: Option<Url>,
    /// Bearer token for the REST API
    pub api_token: Option<SecretString>,
    /// Directory holding persisted store snapshots
    pub state_dir: PathBuf,
    /// Per-request HTTP timeout
    pub http_timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url.as_ref().map(Url::as_str))
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("state_dir", &self.state_dir)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_token: None,
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_url = get(API_URL_VAR)
            .map(|raw| {
                Url::parse(raw.trim())
                    .map_err(|e| ConfigError::InvalidEnvVar(API_URL_VAR.to_string(), e.to_string()))
            })
            .transpose()?;
        let api_token = get(API_TOKEN_VAR).map(SecretString::from);
        let state_dir = get(STATE_DIR_VAR).map_or_else(|| PathBuf::from(DEFAULT_STATE_DIR), PathBuf::from);
        let http_timeout = get(HTTP_TIMEOUT_VAR)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| {
                        ConfigError::InvalidEnvVar(
                            HTTP_TIMEOUT_VAR.to_string(),
                            format!("expected a positive number of seconds, got {raw:?}"),
                        )
                    })
            })
            .transpose()?
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Ok(Self {
            api_url,
            api_token,
            state_dir,
            http_timeout: Duration::from_secs(http_timeout),
        })
    }

    /// The API base URL, required for remote operations.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `LINKPAGE_API_URL` is not set.
    pub fn require_api_url(&self) -> Result<&Url, ConfigError> {
        self.api_url
            .as_ref()
            .ok_or_else(|| ConfigError::MissingEnvVar(API_URL_VAR.to_string()))
    }
}
