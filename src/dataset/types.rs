//! Dataset Data Types
//!
//! Defines the in-memory representation of the tabular source: typed cell
//! values, records, and the `Dataset` container with its query operations.

use serde_json::{Map, Value};
use std::collections::HashSet;

/// Column name every dataset must carry; identifies the company a row belongs to.
pub const INDEX_NAME_COLUMN: &str = "index_name";

/// Placeholder substituted for missing cells, only on data returned to a client.
pub const NO_DATA_PLACEHOLDER: &str = "No Data";

/// A single typed cell of the table.
///
/// "Missing" is modeled as its own variant rather than an empty string so the
/// stored dataset stays free of string-typed sentinels. Conversion to the
/// `"No Data"` placeholder happens only in [`Dataset::record_json`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// JSON rendering with the missing-value substitution applied.
    fn to_json(&self) -> Value {
        match self {
            CellValue::Text(s) => Value::String(s.clone()),
            CellValue::Integer(i) => Value::Number((*i).into()),
            CellValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(f.to_string())),
            CellValue::Missing => Value::String(NO_DATA_PLACEHOLDER.to_string()),
        }
    }
}

/// One row of the table. Values are positional, parallel to `Dataset::columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub values: Vec<CellValue>,
}

impl Record {
    pub fn new(values: Vec<CellValue>) -> Self {
        Self { values }
    }
}

/// The immutable, process-wide table of stock-index records.
///
/// Built once at startup (or explicitly in tests) and injected into the
/// request layer behind an `Arc`. Never mutated after construction, so
/// concurrent readers need no synchronization.
#[derive(Debug)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
    /// Position of the `index_name` column; `None` only for the empty dataset.
    index_name_pos: Option<usize>,
}

impl Dataset {
    /// Builds a dataset from column names and rows.
    ///
    /// Returns `Err` with the missing column name if `index_name` is absent
    /// from a non-empty column list. Rows shorter than the column list are
    /// padded with `Missing`; longer rows are truncated.
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Result<Self, String> {
        let index_name_pos = columns.iter().position(|c| c == INDEX_NAME_COLUMN);
        if !columns.is_empty() && index_name_pos.is_none() {
            return Err(format!("missing required column '{INDEX_NAME_COLUMN}'"));
        }

        let width = columns.len();
        let records = records
            .into_iter()
            .map(|mut r| {
                r.values.resize(width, CellValue::Missing);
                r
            })
            .collect();

        Ok(Self {
            columns,
            records,
            index_name_pos,
        })
    }

    /// The dataset used when the source file is absent. Every query against it
    /// reports no data available.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            records: Vec::new(),
            index_name_pos: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Distinct non-missing `index_name` values, each exactly once.
    ///
    /// First-seen order in practice; callers must not rely on any ordering.
    pub fn company_names(&self) -> Vec<String> {
        let Some(pos) = self.index_name_pos else {
            return Vec::new();
        };

        let mut seen: HashSet<&str> = HashSet::new();
        let mut names = Vec::new();
        for record in &self.records {
            if let CellValue::Text(name) = &record.values[pos] {
                if seen.insert(name.as_str()) {
                    names.push(name.clone());
                }
            }
        }
        names
    }

    /// Every record whose `index_name` equals `name` exactly, in dataset order.
    pub fn records_for(&self, name: &str) -> Vec<&Record> {
        let Some(pos) = self.index_name_pos else {
            return Vec::new();
        };

        self.records
            .iter()
            .filter(|r| matches!(&r.values[pos], CellValue::Text(n) if n == name))
            .collect()
    }

    /// Renders a record as a JSON object mapping every column to its value,
    /// with missing cells replaced by the `"No Data"` placeholder. The stored
    /// record itself is never rewritten.
    pub fn record_json(&self, record: &Record) -> Map<String, Value> {
        self.columns
            .iter()
            .zip(&record.values)
            .map(|(column, value)| (column.clone(), value.to_json()))
            .collect()
    }
}
