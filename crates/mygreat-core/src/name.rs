//! Migration names
//!
//! Provides [`MigrationName`], the opaque key migrations are tracked by.

use crate::error::NameError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

/// Opaque migration identifier
///
/// Usually a fixed-width timestamp token such as `20170914202400`, so the
/// lexicographic ordering derived here is also chronological.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MigrationName(String);

impl MigrationName {
    /// Validate and wrap a name
    ///
    /// # Errors
    /// - `NameError::Empty` for an empty string
    /// - `NameError::InvalidCharacter` for path separators, whitespace or
    ///   control characters
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if let Some(character) = name
            .chars()
            .find(|c| matches!(c, '/' | '\\') || c.is_whitespace() || c.is_control())
        {
            return Err(NameError::InvalidCharacter { name, character });
        }
        Ok(Self(name))
    }

    /// Name of a migration file: its file name without extension
    ///
    /// # Errors
    /// `NameError::NoFileStem` if the path has no UTF-8 file stem, or any
    /// error from [`MigrationName::new`]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NameError> {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| NameError::NoFileStem(path.to_path_buf()))?;
        Self::new(stem)
    }

    /// Borrow as str
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the owned string
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for MigrationName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MigrationName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for MigrationName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MigrationName> for String {
    fn from(name: MigrationName) -> Self {
        name.0
    }
}

impl AsRef<str> for MigrationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MigrationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_timestamp_token() {
        let name = MigrationName::new("20170914202400").unwrap();
        assert_eq!(name.as_str(), "20170914202400");
        assert_eq!(name.to_string(), "20170914202400");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(MigrationName::new(""), Err(NameError::Empty));
    }

    #[test]
    fn rejects_separators_and_whitespace() {
        assert!(matches!(
            MigrationName::new("a/b"),
            Err(NameError::InvalidCharacter { character: '/', .. })
        ));
        assert!(matches!(
            MigrationName::new("a b"),
            Err(NameError::InvalidCharacter { character: ' ', .. })
        ));
        assert!(MigrationName::new("a\\b").is_err());
        assert!(MigrationName::new("a\nb").is_err());
    }

    #[test]
    fn from_path_strips_extension() {
        let name = MigrationName::from_path("/srv/migrations/20170914182600.js").unwrap();
        assert_eq!(name.as_str(), "20170914182600");

        let name = MigrationName::from_path("20170914182600").unwrap();
        assert_eq!(name.as_str(), "20170914182600");
    }

    #[test]
    fn from_path_without_stem() {
        assert!(matches!(
            MigrationName::from_path("/"),
            Err(NameError::NoFileStem(_))
        ));
    }

    #[test]
    fn orders_lexicographically() {
        let a: MigrationName = "20170914182600".parse().unwrap();
        let b: MigrationName = "20170914202400".parse().unwrap();
        assert!(a < b);
    }

    #[test]
    fn serde_transparent_and_validated() {
        let name: MigrationName = serde_json::from_str("\"20170914205000\"").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"20170914205000\"");

        assert!(serde_json::from_str::<MigrationName>("\"\"").is_err());
    }
}
