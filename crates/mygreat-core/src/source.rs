//! Source traits
//!
//! - [`MigrationSource`]: anything that lists migration names (what the
//!   analyser consumes)
//! - [`Locator`]: lists migration files with their resolved paths
//! - [`RecordStore`]: lists stored migration records
//!
//! Repositories in [`crate::repository`] turn locators and record stores
//! into migration sources.

use crate::error::SourceError;
use crate::name::MigrationName;
use crate::record::MigrationRecord;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// Lists migration names
#[async_trait]
pub trait MigrationSource: Send + Sync {
    /// Human-readable description for logs
    fn describe(&self) -> String;

    /// Fetch the current list of names
    ///
    /// # Errors
    /// `SourceError::Unavailable` if the source cannot be read,
    /// `SourceError::MalformedEntry` if an entry is not a migration name
    async fn locate(&self) -> Result<Vec<MigrationName>, SourceError>;
}

#[async_trait]
impl<T: MigrationSource + ?Sized> MigrationSource for Arc<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    async fn locate(&self) -> Result<Vec<MigrationName>, SourceError> {
        (**self).locate().await
    }
}

#[async_trait]
impl<T: MigrationSource + ?Sized> MigrationSource for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    async fn locate(&self) -> Result<Vec<MigrationName>, SourceError> {
        (**self).locate().await
    }
}

/// A migration file found by a locator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocatedMigration {
    /// Name derived from the file stem
    pub name: MigrationName,
    /// Absolute path of the file
    pub path: PathBuf,
}

impl LocatedMigration {
    /// Create located migration
    #[inline]
    #[must_use]
    pub fn new(name: MigrationName, path: impl Into<PathBuf>) -> Self {
        Self {
            name,
            path: path.into(),
        }
    }
}

/// Lists migration files
#[async_trait]
pub trait Locator: Send + Sync {
    /// Human-readable description for logs
    fn describe(&self) -> String;

    /// Find migration files; does not read their content
    ///
    /// # Errors
    /// `SourceError` if the location cannot be listed
    async fn locate(&self) -> Result<Vec<LocatedMigration>, SourceError>;
}

/// Lists stored migration records
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Human-readable description for logs
    fn describe(&self) -> String;

    /// All records, in storage order
    ///
    /// # Errors
    /// `SourceError` if the store cannot be queried
    async fn records(&self) -> Result<Vec<MigrationRecord>, SourceError>;
}
