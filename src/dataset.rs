//! CSV dataset preview.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DatasetTable {
    /// Parses CSV bytes. Cells are kept verbatim. A file without a header is
    /// an error, as is any row wider than the header; shorter rows are padded
    /// with empty cells.
    pub fn from_csv(bytes: &[u8]) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(Error::malformed_dataset("no columns to parse from file"));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() > headers.len() {
                let line = record.position().map_or(0, |pos| pos.line());
                return Err(Error::malformed_dataset(format!(
                    "expected {} fields in line {}, saw {}",
                    headers.len(),
                    line,
                    record.len()
                )));
            }

            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads the dataset from disk. Called on every render; nothing is cached.
pub async fn load_dataset<P: AsRef<Path>>(path: P) -> Result<DatasetTable> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let table = DatasetTable::from_csv(&bytes)?;

    debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers.len(),
        "Dataset loaded"
    );

    Ok(table)
}
