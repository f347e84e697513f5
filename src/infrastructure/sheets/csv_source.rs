//! Local CSV export as a record source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::domain::errors::LoadError;
use crate::domain::ports::{RawRow, RecordSourcePort};

/// Reads records from a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvRecordSource {
    path: PathBuf,
}

impl CsvRecordSource {
    /// Creates a source for the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_rows(path: &Path) -> Result<Vec<RawRow>, LoadError> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let row = headers
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    let value = record.get(i).unwrap_or_default();
                    (column.to_string(), serde_json::Value::from(value))
                })
                .collect();
            rows.push(row);
        }
        Ok(rows)
    }
}

#[async_trait]
impl RecordSourcePort for CsvRecordSource {
    async fn fetch_rows(&self) -> Result<Vec<RawRow>, LoadError> {
        let path = self.path.clone();
        let rows = tokio::task::spawn_blocking(move || Self::read_rows(&path))
            .await
            .map_err(|e| LoadError::io(format!("CSV read task failed: {e}")))??;

        info!(path = %self.path.display(), records = rows.len(), "Loaded records from CSV");
        Ok(rows)
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}
