//! Save query results as CSV or JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::types::{ApproachDto, ApproachRow};
use crate::model::ApproachRef;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported output format for {path:?}, expected .csv or .json")]
    UnsupportedFormat { path: PathBuf },
}

pub fn write_to_csv<'db>(
    results: impl IntoIterator<Item = ApproachRef<'db>>,
    path: &Path,
) -> Result<usize, WriteError> {
    let mut writer = csv::Writer::from_path(path)?;
    let mut count = 0;
    for ca in results {
        writer.serialize(ApproachRow::from(&ca))?;
        count += 1;
    }
    // The header comes from the first row; keep it even when nothing matched.
    if count == 0 {
        writer.write_record(ApproachRow::HEADER)?;
    }
    writer.flush()?;
    info!(count, path = %path.display(), "Wrote CSV results");
    Ok(count)
}

pub fn write_to_json<'db>(
    results: impl IntoIterator<Item = ApproachRef<'db>>,
    path: &Path,
) -> Result<usize, WriteError> {
    let records: Vec<ApproachDto> = results.into_iter().map(|ca| ApproachDto::from(&ca)).collect();
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, &records)?;
    out.flush()?;
    info!(count = records.len(), path = %path.display(), "Wrote JSON results");
    Ok(records.len())
}

/// Pick the writer from the file extension.
pub fn write_results<'db>(
    results: impl IntoIterator<Item = ApproachRef<'db>>,
    path: &Path,
) -> Result<usize, WriteError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("csv") => write_to_csv(results, path),
        Some("json") => write_to_json(results, path),
        _ => Err(WriteError::UnsupportedFormat { path: path.to_path_buf() }),
    }
}
