//! Translation completeness audit.
//!
//! This module scans the dataset for records missing one or more of the
//! required Hindi translation fields and collects a report row per gap.
//! A field counts as missing when it is absent, `null`, or an empty
//! string — the three are deliberately equivalent.

use crate::dataset::Record;
use serde::Serialize;

/// The Hindi fields every record is expected to carry, in report order.
pub const TRANSLATION_FIELDS: [&str; 3] = ["name_hi", "cause_hi", "cure_hi"];

/// A report row identifying one record with incomplete translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingEntry {
    /// Zero-based position of the record in the dataset.
    pub index: usize,

    /// The record's `name`, or `"Unknown"` when absent.
    pub name: String,

    /// The fields that failed the presence check, in [`TRANSLATION_FIELDS`]
    /// order. Never empty.
    pub missing_fields: Vec<&'static str>,
}

/// Outcome of auditing a full dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    /// Total number of records scanned.
    pub total: usize,

    /// One entry per record with at least one missing translation field,
    /// in dataset order.
    pub missing: Vec<MissingEntry>,
}

impl AuditReport {
    /// Whether every record passed all three field checks.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Number of records with at least one missing field.
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// How many records are missing each translation field, in
    /// [`TRANSLATION_FIELDS`] order. Used for diagnostic logging.
    pub fn missing_by_field(&self) -> [(&'static str, usize); 3] {
        let mut tally = TRANSLATION_FIELDS.map(|field| (field, 0usize));
        for entry in &self.missing {
            for (field, count) in tally.iter_mut() {
                if entry.missing_fields.contains(field) {
                    *count += 1;
                }
            }
        }
        tally
    }
}

/// Whether a translation field value counts as present.
fn has_translation(value: &Option<String>) -> bool {
    matches!(value, Some(text) if !text.is_empty())
}

/// Scan `records` in order and report every translation gap.
pub fn audit(records: &[Record]) -> AuditReport {
    let mut missing = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let checks = [
            (TRANSLATION_FIELDS[0], &record.name_hi),
            (TRANSLATION_FIELDS[1], &record.cause_hi),
            (TRANSLATION_FIELDS[2], &record.cure_hi),
        ];

        let missing_fields: Vec<&'static str> = checks
            .iter()
            .filter(|(_, value)| !has_translation(value))
            .map(|(field, _)| *field)
            .collect();

        if !missing_fields.is_empty() {
            missing.push(MissingEntry {
                index,
                name: record.display_name().to_string(),
                missing_fields,
            });
        }
    }

    AuditReport {
        total: records.len(),
        missing,
    }
}
