//! Testing utilities for mygreat workspace
//!
//! Shared test helpers, fixtures, and stub sources.

#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mygreat_core::{
    AnalysedCollection, Location, MigrationName, MigrationRecord, MigrationSource, SourceError,
};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Migration files present locally in the reference fixture
pub const REFERENCE_LOCAL: [&str; 5] = [
    "20170914182600",
    "20170914202400",
    "20170914210300",
    "20170914213400",
    "20170914213500",
];

/// Files of the single remote record in the reference fixture
pub const REFERENCE_REMOTE: [&str; 3] = ["20170914202400", "20170914205000", "20170914210300"];

pub const REFERENCE_RECORD_ID: &str = "832185ad-1041-2343-2342-2a80a7c23c4b";

pub fn names(raw: &[&str]) -> Vec<MigrationName> {
    raw.iter().map(|s| name(s)).collect()
}

pub fn name(raw: &str) -> MigrationName {
    MigrationName::new(raw).unwrap()
}

pub fn reference_created_at() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2017-09-19T19:46:50.000Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn reference_record() -> MigrationRecord {
    MigrationRecord::new(
        REFERENCE_RECORD_ID,
        names(&REFERENCE_REMOTE),
        reference_created_at(),
    )
}

/// Expected `all()` for the reference fixture
pub fn reference_expected() -> Vec<(String, Vec<Location>)> {
    use Location::{Local, Remote};
    vec![
        ("20170914182600".to_string(), vec![Local]),
        ("20170914202400".to_string(), vec![Remote, Local]),
        ("20170914205000".to_string(), vec![Remote]),
        ("20170914210300".to_string(), vec![Remote, Local]),
        ("20170914213400".to_string(), vec![Local]),
        ("20170914213500".to_string(), vec![Local]),
    ]
}

/// Collection as `(name, locations)` pairs for easy comparison
pub fn flatten(collection: &AnalysedCollection) -> Vec<(String, Vec<Location>)> {
    collection
        .all()
        .iter()
        .map(|e| (e.name().to_string(), e.locations().to_vec()))
        .collect()
}

/// Create one empty-bodied file per name under `dir`, returning their paths
pub fn write_migration_stubs(dir: &Path, raw: &[&str], extension: &str) -> Vec<PathBuf> {
    raw.iter()
        .map(|n| {
            let path = dir.join(format!("{n}.{extension}"));
            std::fs::write(&path, format!("-- migration {n}\n")).unwrap();
            path
        })
        .collect()
}

/// Source returning a fixed list and counting calls
#[derive(Debug, Default)]
pub struct StaticSource {
    names: Vec<MigrationName>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(raw: &[&str]) -> Self {
        Self {
            names: names(raw),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MigrationSource for StaticSource {
    fn describe(&self) -> String {
        format!("static({})", self.names.len())
    }

    async fn locate(&self) -> Result<Vec<MigrationName>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.names.clone())
    }
}

/// Source that always fails with the given error
#[derive(Debug)]
pub struct FailingSource {
    error: SourceError,
}

impl FailingSource {
    pub fn new(error: SourceError) -> Self {
        Self { error }
    }

    pub fn unavailable(origin: &str) -> Self {
        Self::new(SourceError::unavailable(origin, "connection refused"))
    }
}

#[async_trait]
impl MigrationSource for FailingSource {
    fn describe(&self) -> String {
        "failing".to_string()
    }

    async fn locate(&self) -> Result<Vec<MigrationName>, SourceError> {
        Err(self.error.clone())
    }
}
