//! Loads log rows from CSV files.
//!
//! The expected header is `actor,action,timestamp`. The timestamp column may
//! be empty or absent, in which case rows are stamped with the load time.

use crate::core::LogRow;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct CsvRow {
    actor: String,
    action: String,
    #[serde(default)]
    timestamp: Option<String>,
}

/// Reads rows from a CSV file.
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<LogRow>> {
    let path = path.as_ref();
    info!("Loading log rows from CSV file: {:?}", path);
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open rows file {}", path.display()))?;
    read_rows(file).with_context(|| format!("failed to parse rows file {}", path.display()))
}

/// Reads rows from any CSV source, preserving their order.
pub fn read_rows<R: Read>(source: R) -> Result<Vec<LogRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let loaded_at = Utc::now().to_rfc3339();
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let timestamp = row
            .timestamp
            .filter(|ts| !ts.is_empty())
            .unwrap_or_else(|| loaded_at.clone());
        rows.push(LogRow::new(row.actor, row.action, timestamp));
    }

    debug!("Loaded {} log rows.", rows.len());
    Ok(rows)
}
