// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Paired device model.

use serde::{Deserialize, Serialize};

/// A paired Wahoo sensor or head unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    /// Device ID
    pub id: String,
    /// Display name (e.g. "ELEMNT BOLT")
    pub name: String,
    /// Device category
    #[serde(rename = "type")]
    pub device_type: String,
    /// Hardware model
    pub model: String,
    /// Serial number
    pub serial_number: String,
    /// Installed firmware version
    pub firmware_version: String,
    /// Battery level, 0-100
    pub battery_level: u8,
    /// Last sync timestamp (ISO 8601)
    pub last_sync: String,
}
