//! Analyser
//!
//! Reconciles a local and a remote migration source into an
//! [`AnalysedCollection`]. Both sources are queried on every call; nothing
//! is cached and neither source is mutated.

use crate::collection::AnalysedCollection;
use crate::error::SourceError;
use crate::merge::merge;
use crate::source::MigrationSource;

/// Merges local and remote migration names
#[derive(Debug, Clone)]
pub struct Analyser<L, R> {
    local: L,
    remote: R,
}

impl<L, R> Analyser<L, R>
where
    L: MigrationSource,
    R: MigrationSource,
{
    /// Create analyser over both sources
    #[inline]
    #[must_use]
    pub fn new(local: L, remote: R) -> Self {
        Self { local, remote }
    }

    /// Fetch both sources concurrently and merge them
    ///
    /// # Returns
    /// Every distinct name, sorted ascending, tagged `remote` and/or `local`
    ///
    /// # Errors
    /// The first error reported by either source, unchanged
    pub async fn analyse(&self) -> Result<AnalysedCollection, SourceError> {
        tracing::debug!(
            "Analysing {} against {}",
            self.local.describe(),
            self.remote.describe()
        );

        let (local, remote) = futures::try_join!(self.local.locate(), self.remote.locate())
            .map_err(|e| {
                tracing::error!("Analysis failed: {}", e);
                e
            })?;

        tracing::debug!("Located {} local, {} remote", local.len(), remote.len());

        let collection = merge(&remote, &local);
        let summary = collection.summary();
        tracing::info!(
            "Analysed {} migrations: {} applied, {} pending, {} orphaned",
            summary.total,
            summary.applied,
            summary.pending,
            summary.orphaned
        );

        Ok(collection)
    }

    /// Get local source reference
    #[inline]
    #[must_use]
    pub fn local(&self) -> &L {
        &self.local
    }

    /// Get remote source reference
    #[inline]
    #[must_use]
    pub fn remote(&self) -> &R {
        &self.remote
    }
}
