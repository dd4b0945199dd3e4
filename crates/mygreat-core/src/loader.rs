//! Migration content loading
//!
//! Listing migrations never reads them. Content is loaded on request through
//! a [`MigrationLoader`], one file per call, with nothing cached between
//! calls.

use crate::error::LoadError;
use crate::name::MigrationName;
use crate::source::LocatedMigration;
use async_trait::async_trait;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// SHA-256 of a migration body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksum([u8; 32]);

impl Checksum {
    /// Hash arbitrary bytes
    #[inline]
    #[must_use]
    pub fn compute(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    /// Raw digest
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// First 12 hex chars
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..6])
    }
}

impl Display for Checksum {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for Checksum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Body of a migration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationContent {
    /// File text
    pub body: String,
    /// Checksum of `body`
    pub checksum: Checksum,
}

impl MigrationContent {
    /// Wrap body and compute its checksum
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        let body = body.into();
        let checksum = Checksum::compute(body.as_bytes());
        Self { body, checksum }
    }
}

/// A located migration with its content loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Migration {
    /// Migration name
    pub name: MigrationName,
    /// Absolute path
    pub path: PathBuf,
    /// Loaded content
    pub content: MigrationContent,
}

/// Loads the content of a located migration
#[async_trait]
pub trait MigrationLoader: Send + Sync {
    /// Read one migration
    ///
    /// # Errors
    /// `LoadError` if the file cannot be read or is rejected
    async fn load(&self, located: &LocatedMigration) -> Result<Migration, LoadError>;
}
