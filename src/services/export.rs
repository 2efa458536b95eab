// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Snapshot export to durable file formats.
//!
//! Writes are whole-file overwrites: there is no atomic rename and no
//! locking, so concurrent exports to the same filename race.

use crate::error::{AppError, Result};
use crate::models::Snapshot;
use crate::time_utils::format_filename_timestamp;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Export the full snapshot as pretty-printed JSON.
///
/// When no filename is given, one is generated from a fixed prefix and
/// the current timestamp. Returns the path written.
pub fn export_json(snapshot: &Snapshot, filename: Option<&Path>) -> Result<PathBuf> {
    let path = match filename {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(format!(
            "wahoo_data_{}.json",
            format_filename_timestamp(Utc::now())
        )),
    };

    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Snapshot serialization failed: {}", e)))?;
    std::fs::write(&path, json)
        .map_err(|e| AppError::Export(format!("writing {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), "Snapshot exported to JSON");
    Ok(path)
}

/// Export the activity list as a flat CSV.
///
/// Column order follows the `Activity` field order. Returns `Ok(None)`
/// without writing anything when the snapshot holds no activities.
pub fn export_activities_csv(
    snapshot: &Snapshot,
    filename: Option<&Path>,
) -> Result<Option<PathBuf>> {
    if snapshot.activities.is_empty() {
        tracing::warn!("No activities to export");
        return Ok(None);
    }

    let path = match filename {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(format!(
            "wahoo_activities_{}.csv",
            format_filename_timestamp(Utc::now())
        )),
    };

    let mut writer = csv::Writer::from_path(&path)
        .map_err(|e| AppError::Export(format!("creating {}: {}", path.display(), e)))?;
    for activity in &snapshot.activities {
        writer
            .serialize(activity)
            .map_err(|e| AppError::Export(format!("writing {}: {}", path.display(), e)))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::Export(format!("writing {}: {}", path.display(), e)))?;

    tracing::info!(
        path = %path.display(),
        count = snapshot.activities.len(),
        "Activities exported to CSV"
    );
    Ok(Some(path))
}
