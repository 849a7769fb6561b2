//! CSV Loader
//!
//! One-time startup load of the tabular source into a [`Dataset`].
//!
//! ## Behavior
//! - Absent file: logs a warning and returns the empty dataset. The service
//!   keeps running; every query then reports no data available.
//! - Present file without an `index_name` header: load-time error. A dataset
//!   that can never answer a query is a misconfiguration, not an empty table.
//! - Cell typing: empty field -> `Missing`, integer -> `Integer`, finite
//!   float -> `Float`, anything else -> `Text`. The `index_name` column is
//!   always kept textual so company names match the query path exactly.

use anyhow::{bail, Context, Result};
use std::path::Path;

use super::types::{CellValue, Dataset, Record, INDEX_NAME_COLUMN};

/// Default relative location of the tabular source.
pub const DEFAULT_DATA_FILE: &str = "dump.csv";

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        tracing::warn!(
            "Data file {} not found, starting with an empty dataset",
            path.display()
        );
        return Ok(Dataset::empty());
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV file {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let index_name_pos = match headers.iter().position(|h| h == INDEX_NAME_COLUMN) {
        Some(pos) => pos,
        None => bail!(
            "CSV file {} is missing the required '{}' column",
            path.display(),
            INDEX_NAME_COLUMN
        ),
    };

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("reading CSV row {row_no}"))?;

        let values = row
            .iter()
            .enumerate()
            .map(|(col, field)| parse_cell(field, col == index_name_pos))
            .collect();

        records.push(Record::new(values));
    }

    let dataset = Dataset::new(headers, records)
        .map_err(|e| anyhow::anyhow!("building dataset from {}: {}", path.display(), e))?;

    tracing::info!(
        "Loaded {} records ({} columns) from {}",
        dataset.len(),
        dataset.columns().len(),
        path.display()
    );

    Ok(dataset)
}

fn parse_cell(field: &str, is_index_name: bool) -> CellValue {
    if field.is_empty() {
        return CellValue::Missing;
    }
    if is_index_name {
        return CellValue::Text(field.to_string());
    }
    if let Ok(i) = field.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = field.parse::<f64>() {
        if f.is_finite() {
            return CellValue::Float(f);
        }
    }
    CellValue::Text(field.to_string())
}
