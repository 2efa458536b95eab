// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test fixtures.

use serde_json::json;
use wahoo_exporter::models::{Activity, Device, Snapshot, Summary, UserProfile};

/// Build an activity with the given identity and sensible defaults.
#[allow(dead_code)]
pub fn make_activity(id: &str, sport: &str, start: &str) -> Activity {
    Activity {
        id: id.to_string(),
        name: format!("Test Activity {}", id),
        start_time: start.to_string(),
        end_time: start.to_string(),
        duration: 3600,
        distance: 10000.0,
        calories: 500,
        avg_heart_rate: 140,
        max_heart_rate: 165,
        avg_speed: 5.5,
        max_speed: 12.3,
        elevation_gain: 150.0,
        sport: sport.to_string(),
        device_name: "ELEMNT BOLT".to_string(),
    }
}

/// Build a test device.
#[allow(dead_code)]
pub fn make_device(id: &str, name: &str) -> Device {
    Device {
        id: id.to_string(),
        name: name.to_string(),
        device_type: "BIKE_COMPUTER".to_string(),
        model: "WFCC5".to_string(),
        serial_number: "SN-0001".to_string(),
        firmware_version: "15.0".to_string(),
        battery_level: 80,
        last_sync: "2024-06-01T08:00:00Z".to_string(),
    }
}

/// Build a snapshot around the given activities; the summary is derived.
#[allow(dead_code)]
pub fn make_snapshot(activities: Vec<Activity>) -> Snapshot {
    let summary = Summary::from_activities(&activities);
    Snapshot {
        user: UserProfile {
            id: "42".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Rider".to_string(),
            email: "jo@example.com".to_string(),
            ..UserProfile::default()
        },
        devices: vec![make_device("d1", "ELEMNT BOLT")],
        activities,
        workouts: vec![json!({"id": "w1", "name": "Intervals"})],
        metrics: json!({"ftp": 250}),
        summary,
        scraped_at: "2024-06-01T12:00:00Z".to_string(),
    }
}
