//! Record loading with a fixed refresh interval.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::entities::{ColumnMapping, EmployeeTable};
use crate::domain::errors::LoadError;
use crate::domain::ports::RecordSourcePort;

/// Default refresh interval of the directory data.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(600);

/// Result of a load attempt.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// Records are available.
    Loaded(Arc<EmployeeTable>),
    /// The source was read but holds no records.
    Empty,
    /// The source could not be read.
    Failed(LoadError),
}

struct CachedTable {
    table: Arc<EmployeeTable>,
    loaded_at: Instant,
}

/// Loads the directory and keeps it for the refresh interval.
///
/// Failed loads are not cached; the next call tries the source again.
pub struct LoadDirectoryUseCase {
    source: Arc<dyn RecordSourcePort>,
    columns: ColumnMapping,
    refresh_interval: Duration,
    cached: RwLock<Option<CachedTable>>,
}

impl std::fmt::Debug for LoadDirectoryUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadDirectoryUseCase")
            .field("source", &self.source.describe())
            .field("refresh_interval", &self.refresh_interval)
            .finish_non_exhaustive()
    }
}

impl LoadDirectoryUseCase {
    /// Creates the loader.
    #[must_use]
    pub fn new(
        source: Arc<dyn RecordSourcePort>,
        columns: ColumnMapping,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            source,
            columns,
            refresh_interval,
            cached: RwLock::new(None),
        }
    }

    /// Returns the current directory, reading the source when the cached
    /// copy is missing or older than the refresh interval.
    pub async fn execute(&self) -> LoadOutcome {
        if let Some(table) = self.fresh_table().await {
            debug!(records = table.len(), "Serving cached directory");
            return Self::outcome(table);
        }

        match self.read_source().await {
            Ok(table) => {
                let table = Arc::new(table);
                *self.cached.write().await = Some(CachedTable {
                    table: table.clone(),
                    loaded_at: Instant::now(),
                });
                Self::outcome(table)
            }
            Err(e) => {
                warn!(source = %self.source.describe(), error = %e, "Failed to load directory");
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Drops the cached directory so the next call reads the source.
    pub async fn invalidate(&self) {
        *self.cached.write().await = None;
        debug!("Directory cache invalidated");
    }

    async fn fresh_table(&self) -> Option<Arc<EmployeeTable>> {
        let cached = self.cached.read().await;
        cached
            .as_ref()
            .filter(|c| c.loaded_at.elapsed() < self.refresh_interval)
            .map(|c| c.table.clone())
    }

    async fn read_source(&self) -> Result<EmployeeTable, LoadError> {
        let rows = self.source.fetch_rows().await?;
        let table = EmployeeTable::from_rows(&rows, &self.columns)?;
        info!(
            source = %self.source.describe(),
            records = table.len(),
            "Directory loaded"
        );
        Ok(table)
    }

    fn outcome(table: Arc<EmployeeTable>) -> LoadOutcome {
        if table.is_empty() {
            LoadOutcome::Empty
        } else {
            LoadOutcome::Loaded(table)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockRecordSource, employee_row};

    fn use_case(source: &MockRecordSource, interval: Duration) -> LoadDirectoryUseCase {
        LoadDirectoryUseCase::new(
            Arc::new(source.clone()),
            ColumnMapping::default(),
            interval,
        )
    }

    #[tokio::test]
    async fn test_loads_records() {
        let source = MockRecordSource::with_rows(vec![
            employee_row("Sato", "Sales", "Excel", ""),
            employee_row("Suzuki", "Dev", "Rust", ""),
        ]);

        let outcome = use_case(&source, DEFAULT_REFRESH_INTERVAL).execute().await;

        let LoadOutcome::Loaded(table) = outcome else {
            panic!("expected records, got {outcome:?}");
        };
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1].name, "Suzuki");
    }

    #[tokio::test]
    async fn test_cached_within_interval() {
        let source = MockRecordSource::with_rows(vec![employee_row("Sato", "Sales", "Excel", "")]);
        let loader = use_case(&source, DEFAULT_REFRESH_INTERVAL);

        loader.execute().await;
        loader.execute().await;

        assert_eq!(source.reads(), 1);
    }

    #[tokio::test]
    async fn test_reloads_after_interval() {
        let source = MockRecordSource::with_rows(vec![employee_row("Sato", "Sales", "Excel", "")]);
        let loader = use_case(&source, Duration::ZERO);

        loader.execute().await;
        loader.execute().await;

        assert_eq!(source.reads(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let source = MockRecordSource::with_rows(vec![employee_row("Sato", "Sales", "Excel", "")]);
        let loader = use_case(&source, DEFAULT_REFRESH_INTERVAL);

        loader.execute().await;
        loader.invalidate().await;
        loader.execute().await;

        assert_eq!(source.reads(), 2);
    }

    #[tokio::test]
    async fn test_empty_source() {
        let source = MockRecordSource::with_rows(Vec::new());

        let outcome = use_case(&source, DEFAULT_REFRESH_INTERVAL).execute().await;

        assert!(matches!(outcome, LoadOutcome::Empty));
    }

    #[tokio::test]
    async fn test_failures_not_cached() {
        let source = MockRecordSource::failing(LoadError::network("unreachable"));
        let loader = use_case(&source, DEFAULT_REFRESH_INTERVAL);

        assert!(matches!(loader.execute().await, LoadOutcome::Failed(_)));

        source.set_result(Ok(vec![employee_row("Sato", "Sales", "Excel", "")]));
        assert!(matches!(loader.execute().await, LoadOutcome::Loaded(_)));
        assert_eq!(source.reads(), 2);
    }

    #[tokio::test]
    async fn test_missing_column_fails() {
        let mut row = employee_row("Sato", "Sales", "Excel", "");
        row.remove("質問2");
        let source = MockRecordSource::with_rows(vec![row]);

        let outcome = use_case(&source, DEFAULT_REFRESH_INTERVAL).execute().await;

        assert!(matches!(
            outcome,
            LoadOutcome::Failed(LoadError::MissingColumn(ref c)) if c == "質問2"
        ));
    }
}
