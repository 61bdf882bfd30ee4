//! YAML configuration store with shallow merging and a process-wide
//! parse cache.
//!
//! Loads one or more YAML files into a single merged mapping and exposes
//! key-chain lookups over it.
//!
//! ## Merge Strategy
//! - Top-level keys only: later files overwrite earlier files' keys
//! - Nested mappings under a shared top-level key are replaced wholesale,
//!   never merged recursively
//!
//! ## Cache Semantics
//! - Parsed files are cached by path in a process-wide map shared by
//!   every [`ConfigStore`] built with [`ConfigStore::new`]
//! - [`ConfigStore::flush`] invalidates the entries for the loaded paths,
//!   so [`ConfigStore::reload_config`] always re-reads from disk
//! - A store can be built over any [`CacheBackend`]; [`NoopCache`] models
//!   a runtime without a shared cache, and backend absence is never an
//!   error

pub mod cache;
pub mod error;
pub mod merge;
pub mod store;

pub use cache::{CacheBackend, NoopCache, ProcessCache};
pub use error::{ConfigError, ConfigResult};
pub use merge::{shallow_merge, shallow_merge_all};
pub use store::ConfigStore;
