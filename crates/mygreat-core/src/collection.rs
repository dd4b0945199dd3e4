//! Analysed collections
//!
//! The result of reconciling local and remote migrations:
//! - [`MergedEntry`]: one migration name and the places it was found
//! - [`AnalysedCollection`]: all entries, sorted by name
//! - [`AnalysisSummary`]: counts per reconciliation state

use crate::location::{Location, Locations};
use crate::name::MigrationName;
use serde::Serialize;

/// A migration name with every location it was observed in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MergedEntry {
    name: MigrationName,
    locations: Locations,
}

impl MergedEntry {
    /// Create entry; `None` if `locations` is empty
    #[must_use]
    pub fn new(name: MigrationName, locations: impl Into<Locations>) -> Option<Self> {
        let locations = locations.into();
        if locations.is_empty() {
            return None;
        }
        Some(Self { name, locations })
    }

    /// Migration name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &MigrationName {
        &self.name
    }

    /// Locations in precedence order (never empty)
    #[inline]
    #[must_use]
    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    /// Found in the given location
    #[inline]
    #[must_use]
    pub fn is_in(&self, location: Location) -> bool {
        self.locations.contains(location)
    }

    /// Present locally, not recorded remotely
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.is_in(Location::Local) && !self.is_in(Location::Remote)
    }

    /// Recorded remotely, missing locally
    #[inline]
    #[must_use]
    pub fn is_orphaned(&self) -> bool {
        self.is_in(Location::Remote) && !self.is_in(Location::Local)
    }

    /// Present in both places
    #[inline]
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.is_in(Location::Remote) && self.is_in(Location::Local)
    }

    /// Short state label for reports
    #[must_use]
    pub fn state(&self) -> &'static str {
        if self.is_applied() {
            "applied"
        } else if self.is_pending() {
            "pending"
        } else {
            "orphaned"
        }
    }
}

/// Counts per reconciliation state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    /// Distinct migration names
    pub total: usize,
    /// Local only
    pub pending: usize,
    /// Remote only
    pub orphaned: usize,
    /// In both
    pub applied: usize,
}

/// All merged entries, sorted by name ascending
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnalysedCollection {
    entries: Vec<MergedEntry>,
}

impl AnalysedCollection {
    /// Build from entries; sorts them by name
    #[must_use]
    pub fn new(mut entries: Vec<MergedEntry>) -> Self {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { entries }
    }

    /// Every entry, in order
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[MergedEntry] {
        &self.entries
    }

    /// Iterate entries in order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, MergedEntry> {
        self.entries.iter()
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MergedEntry> {
        self.entries
            .binary_search_by(|e| e.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Entries present locally but not recorded remotely
    pub fn pending(&self) -> impl Iterator<Item = &MergedEntry> {
        self.entries.iter().filter(|e| e.is_pending())
    }

    /// Entries recorded remotely but missing locally
    pub fn orphaned(&self) -> impl Iterator<Item = &MergedEntry> {
        self.entries.iter().filter(|e| e.is_orphaned())
    }

    /// Entries present in both places
    pub fn applied(&self) -> impl Iterator<Item = &MergedEntry> {
        self.entries.iter().filter(|e| e.is_applied())
    }

    /// Count entries per state
    #[must_use]
    pub fn summary(&self) -> AnalysisSummary {
        self.entries
            .iter()
            .fold(AnalysisSummary::default(), |mut summary, entry| {
                summary.total += 1;
                if entry.is_applied() {
                    summary.applied += 1;
                } else if entry.is_pending() {
                    summary.pending += 1;
                } else {
                    summary.orphaned += 1;
                }
                summary
            })
    }

    /// Consume into the entry vector
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<MergedEntry> {
        self.entries
    }
}

impl IntoIterator for AnalysedCollection {
    type Item = MergedEntry;
    type IntoIter = std::vec::IntoIter<MergedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnalysedCollection {
    type Item = &'a MergedEntry;
    type IntoIter = std::slice::Iter<'a, MergedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
