// src/output/mod.rs
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use crate::extract::Record;

/// Fixed output path, overwritten on every run.
pub const OUTPUT_PATH: &str = "municipalities.csv";

/// CSV header, written even when there are zero records.
pub const HEADERS: [&str; 4] = [
    "Municipality",
    "Population 2020",
    "Population change 2010-2020 (%)",
    "Population density 2020",
];

/// Serialize the records to `path` as UTF-8, comma-delimited CSV: one header
/// row, then one row per record in header order.
pub fn write_csv<P: AsRef<Path>>(records: &[Record], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .with_context(|| format!("failed to create {:?}", path.as_ref()))?;

    // Written explicitly so an empty extraction still produces a header row.
    wtr.write_record(HEADERS)?;
    for rec in records {
        wtr.serialize(rec)?;
    }
    wtr.flush()
        .with_context(|| format!("failed to flush {:?}", path.as_ref()))?;
    Ok(())
}
