//! Translation audit for the plant-disease dataset.
//!
//! Checks every record in a JSON dataset for the three required Hindi
//! translation fields (`name_hi`, `cause_hi`, `cure_hi`) and reports
//! the records where any of them are absent, null, or empty.
//!
//! # Architecture
//!
//! - `dataset`: record types and dataset loading
//! - `audit`: the per-record presence checks and the report structure
//! - `report`: rendering the report as the tool's stdout text

pub mod audit;
pub mod dataset;
pub mod report;

pub use audit::{audit, AuditReport, MissingEntry, TRANSLATION_FIELDS};
pub use dataset::{load, LoadError, Record};
