//! Configuration
//!
//! Read from TOML; every key is optional:
//!
//! ```toml
//! migrations = "migrations/*"
//!
//! [remote]
//! records = ".mygreat/records.json"
//!
//! [loader]
//! max_file_size = 10485760
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default local migrations pattern
pub const DEFAULT_MIGRATIONS: &str = "migrations/*";

/// Default remote record file
pub const DEFAULT_RECORDS: &str = ".mygreat/records.json";

/// Default maximum size of a loaded migration (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// mygreat configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MygreatConfig {
    /// Glob pattern for local migration files
    pub migrations: String,
    /// Remote record store settings
    pub remote: RemoteConfig,
    /// Content loader settings
    pub loader: LoaderConfig,
}

/// Remote record store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteConfig {
    /// JSON file holding migration records
    pub records: PathBuf,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            records: PathBuf::from(DEFAULT_RECORDS),
        }
    }
}

/// Content loader settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Largest file the loader will read, in bytes
    pub max_file_size: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl MygreatConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// `ConfigError::Parse` for invalid TOML, `ConfigError::Invalid` for
    /// unusable values
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`MygreatConfig::from_toml_str`]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// With migrations pattern
    #[inline]
    #[must_use]
    pub fn with_migrations(mut self, pattern: impl Into<String>) -> Self {
        self.migrations = pattern.into();
        self
    }

    /// With remote records file
    #[inline]
    #[must_use]
    pub fn with_records(mut self, path: impl Into<PathBuf>) -> Self {
        self.remote.records = path.into();
        self
    }

    /// With loader size limit
    #[inline]
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.loader.max_file_size = bytes;
        self
    }

    /// Check values are usable
    ///
    /// # Errors
    /// `ConfigError::Invalid` naming the first bad value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.migrations.trim().is_empty() {
            return Err(ConfigError::Invalid("migrations pattern is empty".to_string()));
        }
        if self.remote.records.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("remote.records path is empty".to_string()));
        }
        if self.loader.max_file_size == 0 {
            return Err(ConfigError::Invalid(
                "loader.max_file_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MygreatConfig {
    fn default() -> Self {
        Self {
            migrations: DEFAULT_MIGRATIONS.to_string(),
            remote: RemoteConfig::default(),
            loader: LoaderConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = MygreatConfig::from_toml_str("").unwrap();
        assert_eq!(config, MygreatConfig::default());
        assert_eq!(config.migrations, "migrations/*");
        assert_eq!(config.remote.records, PathBuf::from(".mygreat/records.json"));
        assert_eq!(config.loader.max_file_size, 10 * 1024 * 1024);
    }

    #[test]
    fn parses_all_keys() {
        let config = MygreatConfig::from_toml_str(
            r#"
            migrations = "db/migrations/*.sql"

            [remote]
            records = "state/records.json"

            [loader]
            max_file_size = 2048
            "#,
        )
        .unwrap();

        assert_eq!(config.migrations, "db/migrations/*.sql");
        assert_eq!(config.remote.records, PathBuf::from("state/records.json"));
        assert_eq!(config.loader.max_file_size, 2048);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            MygreatConfig::from_toml_str("migraitons = \"x\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            MygreatConfig::from_toml_str("migrations = \"  \""),
            Err(ConfigError::Invalid(_))
        ));
        assert!(MygreatConfig::new().with_max_file_size(0).validate().is_err());
    }

    #[test]
    fn builders_override() {
        let config = MygreatConfig::new()
            .with_migrations("m/*.sql")
            .with_records("r.json")
            .with_max_file_size(1);
        assert_eq!(config.migrations, "m/*.sql");
        assert_eq!(config.remote.records, PathBuf::from("r.json"));
        assert_eq!(config.loader.max_file_size, 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            MygreatConfig::from_file("/nonexistent/mygreat.toml"),
            Err(ConfigError::Io { .. })
        ));
    }
}
