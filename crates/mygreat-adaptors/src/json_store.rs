//! JSON file record store
//!
//! Reads a JSON array of records:
//!
//! ```json
//! [
//!   {
//!     "_id": "832185ad-1041-2343-2342-2a80a7c23c4b",
//!     "files": ["20170914202400", "20170914205000"],
//!     "createdAt": "2017-09-19T19:46:50.000Z"
//!   }
//! ]
//! ```

use async_trait::async_trait;
use mygreat_core::{MigrationRecord, RecordStore, SourceError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Record store backed by a JSON file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create store for a file path
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get file path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    fn describe(&self) -> String {
        format!("json({})", self.path.display())
    }

    async fn records(&self) -> Result<Vec<MigrationRecord>, SourceError> {
        let origin = self.path.display().to_string();

        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // Nothing recorded yet
                tracing::debug!("No record file at {}", origin);
                return Ok(Vec::new());
            }
            Err(e) => return Err(SourceError::unavailable(origin, e)),
        };

        serde_json::from_str(&text).map_err(|e| {
            SourceError::malformed(origin, format!("line {}, column {}", e.line(), e.column()), e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_includes_path() {
        let store = JsonFileStore::new("state/records.json");
        assert_eq!(store.describe(), "json(state/records.json)");
        assert_eq!(store.path(), Path::new("state/records.json"));
    }

    #[tokio::test]
    async fn missing_file_has_no_records() {
        let store = JsonFileStore::new("/nonexistent/mygreat/records.json");
        assert!(store.records().await.unwrap().is_empty());
    }
}
