//! Linkpage REST API client.
//!
//! Thin wrapper over the backend endpoints the profile preview and the
//! appearance editor need. Settings and links are returned as raw JSON so the
//! display aggregator can decode them leniently.

use std::time::Duration;

use linkpage_core::style::{
    ButtonStyle, CornerConfig, FontConfig, FontStyle, WallpaperConfig,
    button_style_to_corner_config, font_style_to_font_config, selected_theme_to_wallpaper,
    wallpaper_config_to_backend,
};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::config::{ClientConfig, ConfigError};
use crate::display::{DisplayProps, build_display_props};
use crate::models::UserRecord;

const SETTINGS_PATH: &str = "settings";
const LINKS_PATH: &str = "links";
const CURRENT_USER_PATH: &str = "users/me";
const APPEARANCE_PATH: &str = "settings/appearance";

/// Errors that can occur when talking to the Linkpage API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Endpoint could not be joined onto the base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Token cannot be sent as a header value.
    #[error("Invalid API token: {0}")]
    InvalidToken(String),

    /// Client configuration is incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Appearance payload accepted by `PUT settings/appearance`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppearanceUpdate {
    pub corner: CornerConfig,
    pub font: FontConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallpaper: Option<WallpaperConfig>,
}

impl AppearanceUpdate {
    /// Build the backend payload from the editor's UI styles.
    ///
    /// The wallpaper is only included when `selected_theme` encodes a fill or
    /// gradient; theme assets and image URLs leave the stored wallpaper alone.
    #[must_use]
    pub fn from_styles(
        button_style: &ButtonStyle,
        font_style: &FontStyle,
        selected_theme: Option<&str>,
    ) -> Self {
        Self {
            corner: button_style_to_corner_config(button_style),
            font: font_style_to_font_config(font_style),
            wallpaper: selected_theme
                .and_then(selected_theme_to_wallpaper)
                .map(|config| wallpaper_config_to_backend(&config)),
        }
    }
}

/// Linkpage REST API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(
        base_url: Url,
        token: Option<&SecretString>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|e| ApiError::InvalidToken(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
        })
    }

    /// Create a client from configuration.
    ///
    /// A configured `LINKPAGE_API_TOKEN` wins over `session_token`.
    ///
    /// # Errors
    ///
    /// Returns error if no API URL is configured or the client fails to build.
    pub fn from_config(
        config: &ClientConfig,
        session_token: Option<&SecretString>,
    ) -> Result<Self, ApiError> {
        let base_url = config.require_api_url()?.clone();
        Self::new(
            base_url,
            config.api_token.as_ref().or(session_token),
            config.http_timeout,
        )
    }

    /// The normalized base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    /// Fetch the raw appearance and profile settings.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not JSON.
    pub async fn fetch_settings(&self) -> Result<Value, ApiError> {
        self.get_json(SETTINGS_PATH).await
    }

    /// Fetch the raw link list.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not JSON.
    pub async fn fetch_links(&self) -> Result<Value, ApiError> {
        self.get_json(LINKS_PATH).await
    }

    /// Fetch the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a user record.
    pub async fn fetch_current_user(&self) -> Result<UserRecord, ApiError> {
        self.get_json(CURRENT_USER_PATH).await
    }

    /// Save the appearance settings.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn update_appearance(&self, update: &AppearanceUpdate) -> Result<(), ApiError> {
        let url = self.endpoint(APPEARANCE_PATH)?;
        let response = self.client.put(url).json(update).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Fetch settings, links and the current user concurrently and aggregate them.
///
/// Each failed fetch is logged and treated as absent, so this always produces
/// renderable props.
pub async fn load_display_props(client: &ApiClient) -> DisplayProps {
    let (settings, links, user) = tokio::join!(
        client.fetch_settings(),
        client.fetch_links(),
        client.fetch_current_user(),
    );

    let settings = settings
        .inspect_err(|e| warn!(error = %e, "Failed to fetch settings"))
        .ok();
    let links = links
        .inspect_err(|e| warn!(error = %e, "Failed to fetch links"))
        .ok();
    let user = user
        .inspect_err(|e| warn!(error = %e, "Failed to fetch current user"))
        .ok();

    build_display_props(settings.as_ref(), links.as_ref(), user.as_ref())
}
