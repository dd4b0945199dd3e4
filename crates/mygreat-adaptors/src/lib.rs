//! mygreat Adaptors
//!
//! Concrete collaborators for the core traits:
//!
//! - [`DirectoryLocator`]: migration files matching a glob pattern
//! - [`MemoryStore`]: records held in memory
//! - [`JsonFileStore`]: records read from a JSON file
//! - [`FileLoader`]: migration content read from disk on request
//!
//! # Example
//!
//! ```rust,ignore
//! use mygreat_adaptors::{DirectoryLocator, MemoryStore};
//! use mygreat_core::{Analyser, LocalRepository, RemoteRepository};
//!
//! let analyser = Analyser::new(
//!     LocalRepository::new(DirectoryLocator::new("migrations/*.js")),
//!     RemoteRepository::new(MemoryStore::new(records)),
//! );
//! let collection = analyser.analyse().await?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod directory;
pub mod json_store;
pub mod loader;
pub mod memory;

// Re-exports for convenience
pub use directory::DirectoryLocator;
pub use json_store::JsonFileStore;
pub use loader::FileLoader;
pub use memory::MemoryStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
