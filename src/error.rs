// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Every failure surfaces as an [`AppError`]; API errors keep the HTTP
//! status and raw response body so callers see exactly what the platform
//! returned. Nothing is retried anywhere.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Wahoo API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether this error is an authentication failure (HTTP 401).
    ///
    /// Used by the binaries to suggest re-running the OAuth flow; has no
    /// effect on propagation.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AppError::Api { status: 401, .. })
    }

    /// Build a transport error from a reqwest failure.
    pub fn transport(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, AppError>;
