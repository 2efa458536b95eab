//! Summary statistics derived from a scraped activity list.
//!
//! Recomputed from scratch on every scrape; nothing here is persisted
//! between runs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Activity;

/// Sport label used when an activity carries no sport tag.
const UNKNOWN_SPORT: &str = "Unknown";

/// Aggregate statistics over one scrape's activities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Total activities captured
    pub total_activities: u32,
    /// Total distance in kilometers, rounded to 2 decimal places
    pub total_distance_km: f64,
    /// Total calories burned
    pub total_calories: u64,
    /// Total duration in hours, rounded to 2 decimal places
    pub total_duration_hours: f64,
    /// Mean of nonzero average heart rates, rounded to nearest bpm
    pub avg_heart_rate: u32,
    /// Activity count per sport tag
    pub activities_by_sport: HashMap<String, u32>,
    /// Up to 5 most recent activities, latest start time first
    pub recent_activities: Vec<Activity>,
}

impl Summary {
    /// Compute summary statistics from an activity list.
    pub fn from_activities(activities: &[Activity]) -> Self {
        let total_distance_m: f64 = activities.iter().map(|a| a.distance).sum();
        let total_calories: u64 = activities.iter().map(|a| u64::from(a.calories)).sum();
        let total_duration_secs: f64 = activities.iter().map(|a| f64::from(a.duration)).sum();

        // Zero readings mean "no heart-rate data" and are excluded from
        // both the numerator and the denominator.
        let heart_rates: Vec<f64> = activities
            .iter()
            .map(|a| a.avg_heart_rate)
            .filter(|&hr| hr > 0)
            .map(f64::from)
            .collect();
        let avg_heart_rate = if heart_rates.is_empty() {
            0
        } else {
            (heart_rates.iter().sum::<f64>() / heart_rates.len() as f64).round() as u32
        };

        let mut activities_by_sport: HashMap<String, u32> = HashMap::new();
        for activity in activities {
            let sport = if activity.sport.is_empty() {
                UNKNOWN_SPORT
            } else {
                activity.sport.as_str()
            };
            *activities_by_sport.entry(sport.to_string()).or_insert(0) += 1;
        }

        // Stable sort: ties keep original fetch order.
        let mut recent_activities = activities.to_vec();
        recent_activities.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        recent_activities.truncate(5);

        Self {
            total_activities: activities.len() as u32,
            total_distance_km: round2(total_distance_m / 1000.0),
            total_calories,
            total_duration_hours: round2(total_duration_secs / 3600.0),
            avg_heart_rate,
            activities_by_sport,
            recent_activities,
        }
    }
}

/// Round to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
