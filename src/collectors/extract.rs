//! Loaders for the NEO catalog (CSV) and the close-approach data (JSON).

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::model::{CloseApproach, NearEarthObject, ValidationError};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("close-approach data has no {field:?} column")]
    MissingField { field: &'static str },
    #[error("invalid record at row {row}: {source}")]
    Invalid { row: usize, source: ValidationError },
}

#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: String,
    name: Option<String>,
    diameter: Option<f64>,
    pha: Option<String>,
}

/// Read NEOs from a catalog CSV with at least the `pdes`, `name`, `diameter` and `pha` columns.
pub fn load_neos(path: &Path) -> Result<Vec<NearEarthObject>, ExtractError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut neos = Vec::new();
    for (idx, row) in reader.deserialize::<NeoRow>().enumerate() {
        let row = row?;
        let hazardous = row.pha.as_deref().map(str::trim) == Some("Y");
        let neo = NearEarthObject::new(row.pdes, row.name, row.diameter, hazardous)
            .map_err(|source| ExtractError::Invalid { row: idx + 1, source })?;
        neos.push(neo);
    }
    info!(count = neos.len(), path = %path.display(), "Loaded NEOs");
    Ok(neos)
}

#[derive(Debug, Deserialize)]
struct CadFile {
    fields: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<Value>>,
}

fn column(fields: &[String], field: &'static str) -> Result<usize, ExtractError> {
    fields
        .iter()
        .position(|f| f == field)
        .ok_or(ExtractError::MissingField { field })
}

fn cell(row: &[Value], idx: usize) -> String {
    match row.get(idx) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Read close approaches from a CAD API style JSON document.
///
/// Columns are located through the `fields` header: `des`, `cd`, `dist` and `v_rel`.
pub fn load_approaches(path: &Path) -> Result<Vec<CloseApproach>, ExtractError> {
    let content = fs::read_to_string(path)?;
    let cad: CadFile = serde_json::from_str(&content)?;

    let des = column(&cad.fields, "des")?;
    let cd = column(&cad.fields, "cd")?;
    let dist = column(&cad.fields, "dist")?;
    let v_rel = column(&cad.fields, "v_rel")?;
    debug!(des, cd, dist, v_rel, "Resolved close-approach columns");

    let approaches = cad
        .data
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            CloseApproach::from_fields(
                cell(row, des),
                &cell(row, cd),
                &cell(row, dist),
                &cell(row, v_rel),
            )
            .map_err(|source| ExtractError::Invalid { row: idx + 1, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(count = approaches.len(), path = %path.display(), "Loaded close approaches");
    Ok(approaches)
}
