//! CSV loading for daily phone-usage records
//!
//! The input is a comma-separated table with a required header row and
//! columns named exactly `day`, `total_minutes`, and `type`. The whole
//! file is loaded or the load fails: there is no row-level recovery.
//! Unknown `type` labels are rejected here, at load time, so the
//! statistics engine only ever sees the two known categories.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, UsageError};

/// Day-type label attached to every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Category {
    Weekday,
    Weekend,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Weekday => "Weekday",
            Category::Weekend => "Weekend",
        }
    }
}

/// One day of phone usage
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    /// Day ordinal, in input-file order (ascending is assumed, not enforced)
    pub day: u32,
    /// Total usage for the day, in minutes
    pub total_minutes: u32,
    #[serde(rename = "type")]
    pub category: Category,
}

/// Load all records from a CSV file, in file order.
///
/// Fails with [`UsageError::Io`] if the path is unreadable and with
/// [`UsageError::Csv`] if any row has a non-numeric field, a missing
/// column, or a category label other than `Weekday`/`Weekend`.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|source| UsageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: Record = row.map_err(|source| UsageError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record);
    }

    debug!(count = records.len(), path = %path.display(), "loaded usage records");
    Ok(records)
}
