//! File loader
//!
//! Reads migration bodies as UTF-8 text, one file per call.

use async_trait::async_trait;
use mygreat_core::config::DEFAULT_MAX_FILE_SIZE;
use mygreat_core::{
    LoadError, LoaderConfig, LocatedMigration, Migration, MigrationContent, MigrationLoader,
};

/// Loads migration files from disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileLoader {
    /// Maximum file size to read (bytes)
    max_file_size: u64,
}

impl FileLoader {
    /// Create loader with the default size limit
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Create loader from configuration
    #[inline]
    #[must_use]
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new().with_max_file_size(config.max_file_size)
    }

    /// With size limit
    #[inline]
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Get size limit
    #[inline]
    #[must_use]
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }
}

impl Default for FileLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MigrationLoader for FileLoader {
    async fn load(&self, located: &LocatedMigration) -> Result<Migration, LoadError> {
        let path = &located.path;

        let size = tokio::fs::metadata(path)
            .await
            .map_err(|e| LoadError::io_error(path, e))?
            .len();
        if size > self.max_file_size {
            return Err(LoadError::TooLarge {
                path: path.clone(),
                size,
                max: self.max_file_size,
            });
        }

        let body = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoadError::io_error(path, e))?;

        tracing::debug!("Loaded {} ({} bytes)", located.name, body.len());

        Ok(Migration {
            name: located.name.clone(),
            path: path.clone(),
            content: MigrationContent::new(body),
        })
    }
}
