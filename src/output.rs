use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

pub const DEFAULT_CSV_PATH: &str = "linktree_links.csv";
const HEADER: [&str; 3] = ["Name", "URL", "Category"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    pub name: String,
    pub url: String,
    pub category: String,
}

impl LinkRecord {
    pub fn new(name: &str, url: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            category: category.to_string(),
        }
    }
}

/// Write records to `path` as CSV, truncating any existing file.
///
/// The header row is always written, so an empty slice yields a
/// header-only file. Returns the number of data rows.
pub fn write_csv(path: &Path, records: &[LinkRecord]) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(records.len())
}
