//! OAuth application configuration loaded from environment variables.
//!
//! Only the OAuth helper needs these; the scraper itself takes a ready
//! access token and never reads the client credentials.

use std::env;

/// Default redirect URI registered with the Wahoo application.
const DEFAULT_REDIRECT_URI: &str = "https://imkomming.com/api/wahoo_callback";

/// OAuth endpoints live on the API host, outside the versioned base path.
const DEFAULT_AUTH_BASE_URL: &str = "https://api.wahooligan.com";

/// OAuth application credentials, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Wahoo OAuth client ID (public)
    pub client_id: String,
    /// Wahoo OAuth client secret
    pub client_secret: String,
    /// Redirect URI the platform sends the authorization code to
    pub redirect_uri: String,
    /// Base URL of the OAuth endpoints
    pub auth_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honored if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            client_id: env::var("WAHOO_CLIENT_ID")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("WAHOO_CLIENT_ID"))?,
            client_secret: env::var("WAHOO_CLIENT_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("WAHOO_CLIENT_SECRET"))?,
            redirect_uri: env::var("WAHOO_REDIRECT_URI")
                .unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string()),
            auth_base_url: env::var("WAHOO_AUTH_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_AUTH_BASE_URL.to_string()),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            client_id: "test_client_id".to_string(),
            client_secret: "test_secret".to_string(),
            redirect_uri: "http://localhost:8080/callback".to_string(),
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
