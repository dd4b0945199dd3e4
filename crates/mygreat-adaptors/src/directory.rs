//! Directory locator
//!
//! Lists migration files matching a glob pattern. Names come from file
//! stems; content is never read here.

use async_trait::async_trait;
use mygreat_core::{LocatedMigration, Locator, MigrationName, SourceError};
use std::path::{Component, Path, PathBuf};

/// Characters that start a glob token
const GLOB_META: [char; 3] = ['*', '?', '['];

/// Locates migration files by glob pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryLocator {
    pattern: String,
}

impl DirectoryLocator {
    /// Create locator for a pattern such as `migrations/*.sql`
    #[inline]
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Get pattern
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

#[async_trait]
impl Locator for DirectoryLocator {
    fn describe(&self) -> String {
        format!("directory({})", self.pattern)
    }

    async fn locate(&self) -> Result<Vec<LocatedMigration>, SourceError> {
        let pattern = self.pattern.clone();
        let located = tokio::task::spawn_blocking(move || scan(&pattern))
            .await
            .map_err(|e| SourceError::unavailable(self.pattern.as_str(), e))??;

        tracing::debug!("{} files match {}", located.len(), self.pattern);
        Ok(located)
    }
}

/// Directory a pattern is rooted at: the components before the first glob
/// token, or the parent of a literal file path
fn base_dir(pattern: &str) -> PathBuf {
    let path = Path::new(pattern);
    let mut base = PathBuf::new();
    let mut literal = true;

    for component in path.components() {
        if let Component::Normal(part) = component {
            if part.to_string_lossy().contains(GLOB_META) {
                literal = false;
                break;
            }
        }
        base.push(component);
    }

    if literal {
        base.pop();
    }
    if base.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        base
    }
}

fn scan(pattern: &str) -> Result<Vec<LocatedMigration>, SourceError> {
    let base = base_dir(pattern);
    let unavailable = |reason: String| SourceError::unavailable(pattern, reason);

    let metadata = std::fs::metadata(&base)
        .map_err(|e| unavailable(format!("{}: {e}", base.display())))?;
    if !metadata.is_dir() {
        return Err(unavailable(format!("{} is not a directory", base.display())));
    }
    std::fs::read_dir(&base).map_err(|e| unavailable(format!("{}: {e}", base.display())))?;

    // Dotfiles (.gitkeep, editor swap files) are never migrations
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };
    let paths = glob::glob_with(pattern, options).map_err(|e| unavailable(e.to_string()))?;

    let mut located = Vec::new();
    for entry in paths {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry {}: {}", e.path().display(), e.error());
                continue;
            }
        };

        if !path.is_file() {
            continue;
        }

        let absolute = match std::fs::canonicalize(&path) {
            Ok(absolute) => absolute,
            Err(e) => {
                tracing::warn!("Skipping unresolvable entry {}: {}", path.display(), e);
                continue;
            }
        };

        let name = MigrationName::from_path(&absolute)
            .map_err(|e| SourceError::malformed(pattern, path.display().to_string(), e))?;

        located.push(LocatedMigration::new(name, absolute));
    }

    located.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(located)
}
