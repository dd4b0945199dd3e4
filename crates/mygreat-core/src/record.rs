//! Remote migration records

use crate::name::MigrationName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored record: a batch of migrations recorded together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationRecord {
    /// Record identifier
    #[serde(alias = "_id")]
    pub id: String,
    /// Migrations recorded, in order
    pub files: Vec<MigrationName>,
    /// When the batch was recorded
    pub created_at: DateTime<Utc>,
}

impl MigrationRecord {
    /// Create record
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, files: Vec<MigrationName>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            files,
            created_at,
        }
    }
}
