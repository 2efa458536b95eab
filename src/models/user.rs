//! User profile model.

use serde::{Deserialize, Serialize};

/// Wahoo user profile.
///
/// Decoded directly from the top-level `/user` response object. Absent
/// fields fall back to defaults and unknown upstream fields are ignored,
/// so upstream schema drift never fails a scrape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Wahoo user ID
    pub id: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Date of birth (ISO 8601 date)
    pub date_of_birth: String,
    /// Gender as reported by the platform
    pub gender: String,
    /// Height in platform units
    pub height: f64,
    /// Weight in platform units
    pub weight: f64,
    /// IANA timezone name
    pub timezone: String,
}
