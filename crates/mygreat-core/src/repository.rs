//! Repositories: locators and record stores seen as migration sources

use crate::error::SourceError;
use crate::name::MigrationName;
use crate::source::{LocatedMigration, Locator, MigrationSource, RecordStore};
use async_trait::async_trait;

/// Local migrations, as found by a [`Locator`]
#[derive(Debug, Clone)]
pub struct LocalRepository<L> {
    locator: L,
}

impl<L: Locator> LocalRepository<L> {
    /// Wrap locator
    #[inline]
    #[must_use]
    pub fn new(locator: L) -> Self {
        Self { locator }
    }

    /// Located files with paths, for callers that need to load content
    ///
    /// # Errors
    /// Any error from the locator
    pub async fn located(&self) -> Result<Vec<LocatedMigration>, SourceError> {
        self.locator.locate().await
    }

    /// Get locator reference
    #[inline]
    #[must_use]
    pub fn locator(&self) -> &L {
        &self.locator
    }
}

#[async_trait]
impl<L: Locator> MigrationSource for LocalRepository<L> {
    fn describe(&self) -> String {
        format!("local({})", self.locator.describe())
    }

    async fn locate(&self) -> Result<Vec<MigrationName>, SourceError> {
        let located = self.locator.locate().await?;
        Ok(located.into_iter().map(|m| m.name).collect())
    }
}

/// Remote migrations, flattened from a [`RecordStore`]
#[derive(Debug, Clone)]
pub struct RemoteRepository<S> {
    store: S,
}

impl<S: RecordStore> RemoteRepository<S> {
    /// Wrap record store
    #[inline]
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get store reference
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait]
impl<S: RecordStore> MigrationSource for RemoteRepository<S> {
    fn describe(&self) -> String {
        format!("remote({})", self.store.describe())
    }

    async fn locate(&self) -> Result<Vec<MigrationName>, SourceError> {
        let records = self.store.records().await?;
        tracing::debug!("{} records in {}", records.len(), self.store.describe());
        Ok(records.into_iter().flat_map(|r| r.files).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MigrationRecord;
    use chrono::Utc;

    struct FixedLocator(Vec<&'static str>);

    #[async_trait]
    impl Locator for FixedLocator {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        async fn locate(&self) -> Result<Vec<LocatedMigration>, SourceError> {
            Ok(self
                .0
                .iter()
                .map(|n| LocatedMigration::new(n.parse().unwrap(), format!("/m/{n}.sql")))
                .collect())
        }
    }

    struct FixedStore(Vec<MigrationRecord>);

    #[async_trait]
    impl RecordStore for FixedStore {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        async fn records(&self) -> Result<Vec<MigrationRecord>, SourceError> {
            Ok(self.0.clone())
        }
    }

    fn record(id: &str, files: &[&str]) -> MigrationRecord {
        MigrationRecord::new(
            id,
            files.iter().map(|f| f.parse().unwrap()).collect(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn local_keeps_locator_order() {
        let repo = LocalRepository::new(FixedLocator(vec!["2", "1"]));
        let names: Vec<String> = repo
            .locate()
            .await
            .unwrap()
            .into_iter()
            .map(MigrationName::into_inner)
            .collect();
        assert_eq!(names, vec!["2", "1"]);
        assert_eq!(repo.describe(), "local(fixed)");
    }

    #[tokio::test]
    async fn remote_flattens_records_in_order() {
        let repo = RemoteRepository::new(FixedStore(vec![
            record("a", &["1", "2"]),
            record("b", &[]),
            record("c", &["3"]),
        ]));
        let names: Vec<String> = repo
            .locate()
            .await
            .unwrap()
            .into_iter()
            .map(MigrationName::into_inner)
            .collect();
        assert_eq!(names, vec!["1", "2", "3"]);
    }
}
