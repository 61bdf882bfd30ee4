//! Process-wide cache for parsed configuration files.
//!
//! Models the optional cache backend as a capability selected once at
//! store construction:
//! - [`ProcessCache`] - one shared map for the whole process, keyed by
//!   source path
//! - [`NoopCache`] - stands in when no backend is available; never fails
//!
//! All operations are best-effort. A backend that cannot serve a request
//! behaves as if the key were absent, and absence of a backend is never
//! an error.

use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use tracing::debug;

/// Key/value cache for parsed config mappings, keyed by source path.
pub trait CacheBackend: Send + Sync {
    /// Fetch a previously stored mapping, or None on a miss.
    fn fetch(&self, path: &Path) -> Option<Value>;

    /// Store a parsed mapping, best-effort.
    fn store(&self, path: &Path, value: Value);

    /// Delete a cached mapping. Absent keys are a no-op.
    fn delete(&self, path: &Path);
}

/// One map shared by every [`ProcessCache`] in the process.
static PROCESS_CACHE: OnceLock<Mutex<HashMap<PathBuf, Value>>> = OnceLock::new();

fn process_map() -> &'static Mutex<HashMap<PathBuf, Value>> {
    PROCESS_CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Process-wide shared cache.
///
/// Every instance reads and writes the same underlying map, so a mapping
/// stored through one [`ConfigStore`](crate::ConfigStore) is visible to
/// all others in the process. Writes are last-writer-wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCache;

impl CacheBackend for ProcessCache {
    fn fetch(&self, path: &Path) -> Option<Value> {
        let cached = process_map().lock().ok()?.get(path).cloned();
        if cached.is_some() {
            debug!(path = %path.display(), "process cache hit");
        }
        cached
    }

    fn store(&self, path: &Path, value: Value) {
        if let Ok(mut map) = process_map().lock() {
            map.insert(path.to_path_buf(), value);
        }
    }

    fn delete(&self, path: &Path) {
        if let Ok(mut map) = process_map().lock() {
            map.remove(path);
        }
    }
}

/// Cache stand-in for runtimes without a shared cache backend.
///
/// Never stores anything and never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

impl CacheBackend for NoopCache {
    fn fetch(&self, _path: &Path) -> Option<Value> {
        None
    }

    fn store(&self, _path: &Path, _value: Value) {}

    fn delete(&self, _path: &Path) {}
}
