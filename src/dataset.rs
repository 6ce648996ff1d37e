//! Dataset loading for the plant-disease translation audit.
//!
//! The dataset is a UTF-8 JSON array of disease records. Loading reads the
//! whole file into memory and deserializes it in one pass; any failure here
//! is terminal for the run.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Fallback used when a record has no `name` field.
pub const UNKNOWN_NAME: &str = "Unknown";

/// One plant-disease entry from the dataset.
///
/// Only the fields relevant to the audit are modeled; any other keys in the
/// source JSON are ignored. All four fields are optional in the source data,
/// and `null` deserializes the same as an absent key.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    /// English disease name; falls back to [`UNKNOWN_NAME`] in reports.
    #[serde(default)]
    pub name: Option<String>,

    /// Hindi disease name.
    #[serde(default)]
    pub name_hi: Option<String>,

    /// Hindi description of the cause.
    #[serde(default)]
    pub cause_hi: Option<String>,

    /// Hindi description of the cure.
    #[serde(default)]
    pub cure_hi: Option<String>,
}

impl Record {
    /// The record's display name, or `"Unknown"` when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }
}

/// Failure to load the dataset file.
///
/// This is the only error the tool can produce: either the file could not
/// be read, or its contents are not a valid JSON array of records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Load the full dataset from `path`.
///
/// The file handle is released before this function returns, so no I/O
/// resources are held during validation.
pub fn load(path: &Path) -> Result<Vec<Record>, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    let records: Vec<Record> = serde_json::from_str(&contents)?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
