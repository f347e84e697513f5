//! Placeholder source used when no data source could be configured.

use async_trait::async_trait;

use crate::domain::errors::LoadError;
use crate::domain::ports::{RawRow, RecordSourcePort};

/// Fails every read with the configuration error it was built from.
///
/// Keeps the server up so the page can report the problem.
#[derive(Debug, Clone)]
pub struct UnconfiguredSource {
    error: LoadError,
}

impl UnconfiguredSource {
    /// Creates a source that always fails with `error`.
    #[must_use]
    pub const fn new(error: LoadError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl RecordSourcePort for UnconfiguredSource {
    async fn fetch_rows(&self) -> Result<Vec<RawRow>, LoadError> {
        Err(self.error.clone())
    }

    fn describe(&self) -> String {
        "unconfigured".to_string()
    }
}
