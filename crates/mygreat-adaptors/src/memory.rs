//! In-memory record store

use async_trait::async_trait;
use mygreat_core::{MigrationRecord, RecordStore, SourceError};
use parking_lot::RwLock;
use std::sync::Arc;

/// Record store held in memory
///
/// Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<Vec<MigrationRecord>>>,
}

impl MemoryStore {
    /// Create store seeded with records
    #[inline]
    #[must_use]
    pub fn new(records: Vec<MigrationRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Append a record
    pub fn insert(&self, record: MigrationRecord) {
        self.records.write().push(record);
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// No records stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn records(&self) -> Result<Vec<MigrationRecord>, SourceError> {
        Ok(self.records.read().clone())
    }
}
