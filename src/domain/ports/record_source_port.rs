//! Port definition for the tabular data source.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::errors::LoadError;

/// One source row keyed by header name.
pub type RawRow = HashMap<String, serde_json::Value>;

/// Port reading every row of the directory source.
#[async_trait]
pub trait RecordSourcePort: Send + Sync {
    /// Reads all rows of the first sheet as field-named records.
    ///
    /// # Errors
    /// Returns error if the source cannot be reached, authorized or parsed.
    async fn fetch_rows(&self) -> Result<Vec<RawRow>, LoadError>;

    /// Short description of the source for logs.
    fn describe(&self) -> String;
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Source returning a fixed result and counting reads.
    #[derive(Clone)]
    pub struct MockRecordSource {
        result: Arc<Mutex<Result<Vec<RawRow>, LoadError>>>,
        reads: Arc<AtomicUsize>,
    }

    impl MockRecordSource {
        pub fn with_rows(rows: Vec<RawRow>) -> Self {
            Self {
                result: Arc::new(Mutex::new(Ok(rows))),
                reads: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn failing(error: LoadError) -> Self {
            Self {
                result: Arc::new(Mutex::new(Err(error))),
                reads: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn set_result(&self, result: Result<Vec<RawRow>, LoadError>) {
            *self.result.lock().unwrap() = result;
        }

        pub fn reads(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecordSourcePort for MockRecordSource {
        async fn fetch_rows(&self) -> Result<Vec<RawRow>, LoadError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.result.lock().unwrap().clone()
        }

        fn describe(&self) -> String {
            "mock".to_string()
        }
    }

    /// Builds a row with the default column names.
    pub fn employee_row(name: &str, department: &str, skill: &str, photo: &str) -> RawRow {
        let mut row = RawRow::new();
        row.insert("名前".to_string(), serde_json::Value::from(name));
        row.insert("質問1".to_string(), serde_json::Value::from(department));
        row.insert("質問2".to_string(), serde_json::Value::from(skill));
        row.insert("顔写真".to_string(), serde_json::Value::from(photo));
        row
    }
}
