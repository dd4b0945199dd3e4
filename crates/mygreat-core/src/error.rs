//! Error types for mygreat
//!
//! Provides error handling for:
//! - Source operations (locating migrations locally or remotely)
//! - Migration name validation
//! - Content loading
//! - Configuration

use std::path::PathBuf;

/// Errors raised while a source lists its migrations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The source could not complete (I/O failure, store unreachable)
    #[error("source unavailable: {origin}: {reason}")]
    Unavailable {
        /// Source that failed (path pattern, store path, ...)
        origin: String,
        /// What went wrong
        reason: String,
    },

    /// An entry could not be interpreted as a migration name
    #[error("malformed entry in {origin}: '{entry}': {reason}")]
    MalformedEntry {
        /// Source the entry came from
        origin: String,
        /// Raw entry as found
        entry: String,
        /// Why it was rejected
        reason: String,
    },
}

impl SourceError {
    /// Create unavailable error for a source
    pub fn unavailable(origin: impl Into<String>, reason: impl ToString) -> Self {
        Self::Unavailable {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }

    /// Create malformed entry error
    pub fn malformed(
        origin: impl Into<String>,
        entry: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::MalformedEntry {
            origin: origin.into(),
            entry: entry.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if a higher-level caller may retry the operation
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Source the error originated from
    #[inline]
    #[must_use]
    pub fn origin(&self) -> &str {
        match self {
            Self::Unavailable { origin, .. } | Self::MalformedEntry { origin, .. } => origin,
        }
    }
}

/// A string that is not a valid migration name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// Empty name
    #[error("migration name is empty")]
    Empty,

    /// Name contains a character that is not allowed
    #[error("migration name '{name}' contains invalid character {character:?}")]
    InvalidCharacter {
        /// Offending name
        name: String,
        /// First rejected character
        character: char,
    },

    /// Path has no usable file stem
    #[error("no file stem in path: {0}")]
    NoFileStem(PathBuf),
}

/// Errors while loading migration content
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit
    #[error("file too large: {path}: {size} bytes (max: {max})")]
    TooLarge {
        /// File being read
        path: PathBuf,
        /// Actual size
        size: u64,
        /// Configured maximum
        max: u64,
    },
}

impl LoadError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors while reading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading config {path}: {source}")]
    Io {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but holds an unusable value
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Combined mygreat error
#[derive(Debug, thiserror::Error)]
pub enum MygreatError {
    /// Source could not list migrations
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// Invalid migration name
    #[error("name error: {0}")]
    Name(#[from] NameError),

    /// Migration content could not be loaded
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// Configuration could not be read
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for mygreat operations
pub type MygreatResult<T> = Result<T, MygreatError>;
