//! mygreat Core
//!
//! Reconciles the migrations present in a local directory with the
//! migrations recorded in a remote store.
//!
//! # Core Concepts
//!
//! - [`MigrationName`]: opaque, ordered migration key
//! - [`MigrationSource`]: lists names; implemented by [`LocalRepository`]
//!   over a [`Locator`] and [`RemoteRepository`] over a [`RecordStore`]
//! - [`Analyser`]: queries both sources and merges them
//! - [`AnalysedCollection`]: name-sorted [`MergedEntry`] values tagged with
//!   their [`Location`]s, `remote` before `local`
//! - [`MigrationLoader`]: reads a migration's content on request
//!
//! # Example
//!
//! ```rust,ignore
//! use mygreat_core::{Analyser, LocalRepository, RemoteRepository};
//! use mygreat_adaptors::{DirectoryLocator, JsonFileStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let local = LocalRepository::new(DirectoryLocator::new("migrations/*.sql"));
//! let remote = RemoteRepository::new(JsonFileStore::new(".mygreat/records.json"));
//!
//! let collection = Analyser::new(local, remote).analyse().await?;
//! for entry in collection.all() {
//!     println!("{} [{}]", entry.name(), entry.locations());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod analyser;
pub mod collection;
pub mod config;
pub mod error;
pub mod loader;
pub mod location;
pub mod merge;
pub mod name;
pub mod record;
pub mod repository;
pub mod source;

// Re-exports for convenience
pub use analyser::Analyser;
pub use collection::{AnalysedCollection, AnalysisSummary, MergedEntry};
pub use config::{LoaderConfig, MygreatConfig, RemoteConfig};
pub use error::{ConfigError, LoadError, MygreatError, MygreatResult, NameError, SourceError};
pub use loader::{Checksum, Migration, MigrationContent, MigrationLoader};
pub use location::{Location, Locations};
pub use merge::merge;
pub use name::MigrationName;
pub use record::MigrationRecord;
pub use repository::{LocalRepository, RemoteRepository};
pub use source::{LocatedMigration, Locator, MigrationSource, RecordStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with mygreat
    pub use crate::{
        AnalysedCollection, Analyser, LocalRepository, Location, MergedEntry, MigrationName,
        MigrationSource, RemoteRepository, SourceError,
    };
}
