// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Snapshot model: one complete capture of a user's fitness data.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Activity, Device, Summary, UserProfile};

/// One complete in-memory capture of a user's Wahoo data.
///
/// Workouts and metrics are kept as opaque JSON documents since the
/// upstream schema for them is not contractually fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Account profile
    pub user: UserProfile,
    /// Paired devices (may be empty)
    pub devices: Vec<Device>,
    /// Recorded activities, first page only
    pub activities: Vec<Activity>,
    /// Workout documents, passed through untyped
    pub workouts: Vec<Value>,
    /// Metrics document for the trailing 30-day window
    pub metrics: Value,
    /// Statistics derived from `activities`
    pub summary: Summary,
    /// When this snapshot was assembled (RFC3339)
    pub scraped_at: String,
}
