// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Recorded activity model.

use serde::{Deserialize, Serialize};

/// A recorded exercise session.
///
/// Field order is the CSV export column order. Upstream guarantees
/// `end_time >= start_time` when both are present and
/// `avg_heart_rate <= max_heart_rate` when both are nonzero; neither is
/// enforced here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    /// Wahoo activity ID
    pub id: String,
    /// Activity name/title
    pub name: String,
    /// Start timestamp (ISO 8601)
    pub start_time: String,
    /// End timestamp (ISO 8601)
    pub end_time: String,
    /// Duration in seconds
    pub duration: u32,
    /// Distance in meters
    pub distance: f64,
    /// Calories burned
    pub calories: u32,
    /// Average heart rate in bpm (0 when no heart-rate data)
    pub avg_heart_rate: u32,
    /// Maximum heart rate in bpm
    pub max_heart_rate: u32,
    /// Average speed
    pub avg_speed: f64,
    /// Maximum speed
    pub max_speed: f64,
    /// Elevation gain in meters
    pub elevation_gain: f64,
    /// Sport tag (Cycling, Running, etc.; may be empty)
    pub sport: String,
    /// Name of the recording device
    pub device_name: String,
}
