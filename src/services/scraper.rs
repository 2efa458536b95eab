// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data scraping service.
//!
//! Handles the end-to-end workflow:
//! 1. Fetch user profile (mandatory)
//! 2. Fetch devices
//! 3. Fetch one page of activities
//! 4. Fetch workouts
//! 5. Fetch metrics for the trailing 30 days
//! 6. Compute the summary and assemble the snapshot

use crate::error::Result;
use crate::models::{Snapshot, Summary};
use crate::services::wahoo::{WahooClient, DEFAULT_PAGE_LIMIT};
use crate::time_utils::format_utc_rfc3339;
use chrono::{Duration, Utc};

/// Days of metrics history captured per scrape.
const METRICS_WINDOW_DAYS: i64 = 30;

/// Scrapes one complete snapshot of a user's Wahoo data.
pub struct DataScraper {
    api: WahooClient,
}

impl DataScraper {
    pub fn new(api: WahooClient) -> Self {
        Self { api }
    }

    /// Fetch everything and assemble one snapshot.
    ///
    /// Any failure aborts the whole scrape and propagates unmodified;
    /// partial data is discarded. Activities beyond the first
    /// `activity_limit` items of the first page are not captured (no
    /// auto-pagination).
    pub async fn scrape_all(&self, activity_limit: u32) -> Result<Snapshot> {
        tracing::info!(activity_limit, "Starting data scrape");

        // 1. User identity is mandatory; nothing else is fetched if this fails.
        let user = self.api.get_user().await?;
        tracing::info!(
            first_name = %user.first_name,
            last_name = %user.last_name,
            "User fetched"
        );

        // 2. Devices (legitimately may be empty)
        let devices = self.api.get_devices().await?;
        tracing::info!(count = devices.len(), "Devices fetched");

        // 3. One page of activities, capped at activity_limit
        let activities = self.api.get_activities(activity_limit, 0).await?;
        tracing::info!(count = activities.len(), "Activities fetched");

        // 4. Workouts
        let workouts = self.api.get_workouts(DEFAULT_PAGE_LIMIT, 0).await?;
        tracing::info!(count = workouts.len(), "Workouts fetched");

        // 5. Metrics for the trailing 30-day window, endpoints inclusive
        let now = Utc::now();
        let date_to = now.format("%Y-%m-%d").to_string();
        let date_from = (now - Duration::days(METRICS_WINDOW_DAYS))
            .format("%Y-%m-%d")
            .to_string();
        let metrics = self.api.get_metrics(Some(&date_from), Some(&date_to)).await?;

        // 6. Derive the summary and assemble the snapshot
        let summary = Summary::from_activities(&activities);

        let snapshot = Snapshot {
            user,
            devices,
            activities,
            workouts,
            metrics,
            summary,
            scraped_at: format_utc_rfc3339(Utc::now()),
        };

        tracing::info!("Data scrape completed");
        Ok(snapshot)
    }
}
