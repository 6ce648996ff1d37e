use anyhow::Result;
use std::path::Path;
use tracing::info;

use translation_audit::{audit, dataset, report};

/// Fixed dataset location, relative to the working directory.
const DATASET_PATH: &str = "plant_disease.json";

fn main() {
    // Diagnostics share stdout with the report, so stay quiet unless
    // RUST_LOG asks for more.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("translation_audit=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run() {
        // Failures go to the normal print path, not stderr. LoadError's
        // Display already carries the underlying cause, so plain Display
        // here keeps the cause from being printed twice.
        println!("Error reading file: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let records = dataset::load(Path::new(DATASET_PATH))?;
    info!("Loaded {} records", records.len());

    let audit_report = audit::audit(&records);
    for (field, count) in audit_report.missing_by_field() {
        info!("Records missing {}: {}", field, count);
    }

    println!("{}", report::render(&audit_report)?);
    Ok(())
}
