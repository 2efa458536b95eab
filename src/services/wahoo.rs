// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wahoo API client for fetching fitness data.
//!
//! Handles:
//! - Authenticated GETs against the versioned REST base path
//! - Typed JSON decoding into model structs
//! - Error mapping that preserves the HTTP status and response body
//!
//! There is no retry, caching, or rate-limit handling: a 429 or 5xx
//! surfaces exactly like any other non-2xx response.

use crate::error::{AppError, Result};
use crate::models::{Activity, Device, UserProfile};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Versioned REST base path of the Wahoo API.
const DEFAULT_BASE_URL: &str = "https://api.wahooligan.com/v1";

/// Page size used when a caller does not choose one.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Wahoo API client.
#[derive(Debug, Clone)]
pub struct WahooClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl WahooClient {
    /// Create a new client with a caller-supplied bearer token.
    ///
    /// Fails fast with a configuration error if the token is empty; no
    /// network call is attempted.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default base URL (used by tests).
    pub fn with_base_url(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let access_token = access_token.into();
        if access_token.is_empty() {
            return Err(AppError::Config("access token must not be empty".to_string()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            access_token,
        })
    }

    /// Get the authenticated user's profile.
    pub async fn get_user(&self) -> Result<UserProfile> {
        tracing::info!("Fetching user profile");
        self.get_json("/user", &[]).await
    }

    /// Get paired devices. Empty when the account has none.
    pub async fn get_devices(&self) -> Result<Vec<Device>> {
        tracing::info!("Fetching devices");
        let response: DevicesResponse = self.get_json("/devices", &[]).await?;
        Ok(response.devices)
    }

    /// Get one page of activities.
    ///
    /// Exactly one request per call; looping over pages is the caller's
    /// job.
    pub async fn get_activities(&self, limit: u32, offset: u32) -> Result<Vec<Activity>> {
        tracing::info!(limit, offset, "Fetching activities");
        let response: ActivitiesResponse = self
            .get_json(
                "/activities",
                &[("limit", limit.to_string()), ("offset", offset.to_string())],
            )
            .await?;
        Ok(response.activities)
    }

    /// Get a detailed activity record combined with its raw sample data.
    ///
    /// Two sequential requests; if the data request fails, the activity
    /// result is discarded and the error propagates.
    pub async fn get_activity_details(&self, activity_id: &str) -> Result<ActivityDetail> {
        tracing::info!(activity_id, "Fetching activity details");
        let activity: Value = self
            .get_json(&format!("/activities/{}", activity_id), &[])
            .await?;
        let data: Value = self
            .get_json(&format!("/activities/{}/data", activity_id), &[])
            .await?;
        Ok(ActivityDetail { activity, data })
    }

    /// Get one page of workout documents, passed through untyped.
    pub async fn get_workouts(&self, limit: u32, offset: u32) -> Result<Vec<Value>> {
        tracing::info!(limit, offset, "Fetching workouts");
        let response: WorkoutsResponse = self
            .get_json(
                "/workouts",
                &[("limit", limit.to_string()), ("offset", offset.to_string())],
            )
            .await?;
        Ok(response.workouts)
    }

    /// Get the metrics document for a date range.
    ///
    /// Both endpoints are optional; the platform picks the default window
    /// when one is omitted.
    pub async fn get_metrics(
        &self,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> Result<Value> {
        tracing::info!(?date_from, ?date_to, "Fetching metrics");
        let mut params = Vec::new();
        if let Some(from) = date_from {
            params.push(("date_from", from.to_string()));
        }
        if let Some(to) = date_to {
            params.push(("date_to", to.to_string()));
        }
        self.get_json("/metrics", &params).await
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .query(params)
            .send()
            .await
            .map_err(AppError::transport)?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status, body = %body, "Wahoo API request failed");
            return Err(AppError::Api { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("JSON parse error: {}", e)))
    }
}

/// Detailed activity combined with its raw sample data.
///
/// Both halves are opaque documents: the detail/sample schema is not
/// contractually fixed upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDetail {
    pub activity: Value,
    pub data: Value,
}

/// Response wrapper for the devices list endpoint.
#[derive(Debug, Deserialize)]
struct DevicesResponse {
    #[serde(default)]
    devices: Vec<Device>,
}

/// Response wrapper for the activities list endpoint.
#[derive(Debug, Deserialize)]
struct ActivitiesResponse {
    #[serde(default)]
    activities: Vec<Activity>,
}

/// Response wrapper for the workouts list endpoint.
#[derive(Debug, Deserialize)]
struct WorkoutsResponse {
    #[serde(default)]
    workouts: Vec<Value>,
}
