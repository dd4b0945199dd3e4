//! Reconciliation of local and remote name lists
//!
//! Presence is a boolean per source: duplicates within one list collapse,
//! and the two lists are independent membership facts.

use crate::collection::{AnalysedCollection, MergedEntry};
use crate::location::{Location, Locations};
use crate::name::MigrationName;
use std::collections::BTreeMap;

/// Merge both lists into a name-sorted, location-tagged collection
#[must_use]
pub fn merge(remote: &[MigrationName], local: &[MigrationName]) -> AnalysedCollection {
    let mut seen: BTreeMap<&MigrationName, Locations> = BTreeMap::new();

    let tagged = remote
        .iter()
        .map(|name| (name, Location::Remote))
        .chain(local.iter().map(|name| (name, Location::Local)));

    for (name, location) in tagged {
        seen.entry(name).or_default().insert(location);
    }

    // BTreeMap iteration is already sorted by name
    let entries = seen
        .into_iter()
        .filter_map(|(name, locations)| MergedEntry::new(name.clone(), locations))
        .collect();

    AnalysedCollection::new(entries)
}
