// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wahoo OAuth2 authorization-code flow.
//!
//! Handles:
//! - Authorization URL construction
//! - Code-for-token exchange
//! - Token persistence for later reuse

use crate::config::Config;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scope requested for read-only scraping.
const OAUTH_SCOPE: &str = "user_read";

/// Token exchange response, persisted verbatim for later reuse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
    pub scope: String,
}

impl TokenResponse {
    /// Save the token JSON to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Token serialization failed: {}", e)))?;
        std::fs::write(path, json)
            .map_err(|e| AppError::Export(format!("writing {}: {}", path.display(), e)))?;
        tracing::info!(path = %path.display(), "Token saved");
        Ok(())
    }

    /// Load a previously saved token file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("reading {}: {}", path.display(), e)))?;
        serde_json::from_str(&json)
            .map_err(|e| AppError::Config(format!("parsing {}: {}", path.display(), e)))
    }
}

/// Build the browser authorization URL for the code grant.
///
/// The user completes the login interactively; the platform redirects to
/// the configured redirect URI with a `code` query parameter.
pub fn authorize_url(config: &Config, state: Option<&str>) -> String {
    let mut params = vec![
        ("response_type", "code".to_string()),
        ("client_id", config.client_id.clone()),
        ("redirect_uri", config.redirect_uri.clone()),
        ("scope", OAUTH_SCOPE.to_string()),
    ];
    if let Some(state) = state {
        params.push(("state", state.to_string()));
    }

    let query: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect();
    format!("{}/oauth/authorize?{}", config.auth_base_url, query.join("&"))
}

/// Exchange an authorization code for an access token.
pub async fn exchange_code(config: &Config, code: &str) -> Result<TokenResponse> {
    tracing::info!("Exchanging authorization code for access token");

    let response = reqwest::Client::new()
        .post(format!("{}/oauth/token", config.auth_base_url))
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(AppError::transport)?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::error!(status, body = %body, "Token exchange failed");
        return Err(AppError::Api { status, body });
    }

    response
        .json()
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to parse token response: {}", e)))
}
