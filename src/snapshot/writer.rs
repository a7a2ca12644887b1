// writer.rs
use crate::config::Region;
use crate::domain::NormalizedListing;
use crate::snapshot::SnapshotError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The persisted artifact for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub last_updated: String,
    pub city: String,
    pub state: String,
    pub total_count: usize,
    pub properties: Vec<NormalizedListing>,
}

impl Snapshot {
    pub fn new(
        region: &Region,
        properties: Vec<NormalizedListing>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            last_updated: format_timestamp(generated_at),
            city: region.city.clone(),
            state: region.state.clone(),
            total_count: properties.len(),
            properties,
        }
    }

    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.last_updated)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// UTC with a `Z` suffix; fractional seconds only when there are any, and
/// then to the microsecond.
fn format_timestamp(at: DateTime<Utc>) -> String {
    let precision = if at.timestamp_subsec_micros() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    at.to_rfc3339_opts(precision, true)
}

/// Writes the snapshot as 2-space indented JSON, replacing whatever is at
/// `path`. Not atomic: a crash mid-write can leave a truncated file.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SnapshotError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(snapshot).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        "Saved {} properties to {}",
        snapshot.total_count,
        path.display()
    );
    Ok(())
}

pub fn read_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let text = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })
}
