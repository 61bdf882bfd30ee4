//! The configuration store: load, merge, fetch, reload, flush.

use crate::cache::{CacheBackend, ProcessCache};
use crate::error::{ConfigError, ConfigResult};
use crate::merge::shallow_merge;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Owns the merged configuration mapping, the list of source file paths,
/// and the cache-usage flag.
///
/// A store is explicitly constructed and passed by reference; callers
/// that want one shared instance hold a single `ConfigStore` (behind a
/// `Mutex` if accessed from multiple threads) rather than relying on a
/// hidden global. Every store built with [`ConfigStore::new`] shares the
/// process-wide [`ProcessCache`], so parsed files are reused across
/// instances.
///
/// # Example
/// ```no_run
/// use easyconf::ConfigStore;
///
/// let mut store = ConfigStore::new();
/// store.load_config(["defaults.yaml", "overrides.yaml"])?;
/// let port: u16 = store.fetch_as(&["server", "port"])?;
/// # Ok::<(), easyconf::ConfigError>(())
/// ```
pub struct ConfigStore {
    /// Ordered source file list, replaced on each load.
    source_paths: Vec<PathBuf>,
    /// Shallow merge of the loaded files. Always a JSON object.
    merged: Value,
    /// Whether load/flush consult the cache backend.
    use_cache: bool,
    /// Cache backend selected at construction.
    cache: Arc<dyn CacheBackend>,
}

impl ConfigStore {
    /// Create a store backed by the process-wide cache, with caching
    /// enabled.
    pub fn new() -> Self {
        Self::with_cache(Arc::new(ProcessCache))
    }

    /// Create a store with an explicit cache backend.
    ///
    /// Pass [`NoopCache`](crate::NoopCache) to model a runtime without a
    /// shared cache, or a test double to observe cache traffic.
    pub fn with_cache(cache: Arc<dyn CacheBackend>) -> Self {
        Self {
            source_paths: Vec::new(),
            merged: Value::Object(Map::new()),
            use_cache: true,
            cache,
        }
    }

    /// Enable or disable cache usage for all subsequent load and flush
    /// operations.
    pub fn set_use_cache(&mut self, use_cache: bool) {
        self.use_cache = use_cache;
    }

    /// Whether load/flush currently consult the cache backend.
    pub fn use_cache(&self) -> bool {
        self.use_cache
    }

    /// The source paths remembered by the most recent load.
    pub fn source_paths(&self) -> &[PathBuf] {
        &self.source_paths
    }

    /// Load one or more YAML files and shallow-merge them into the
    /// configuration, later paths overwriting earlier top-level keys.
    ///
    /// A single path is passed as a one-element sequence:
    /// `store.load_config(["app.yaml"])`.
    ///
    /// The supplied paths replace the previously remembered list, but the
    /// merged mapping is NOT cleared first: repeated calls without an
    /// intervening [`flush`](Self::flush) accumulate additively onto the
    /// existing configuration. Call [`reload_config`](Self::reload_config)
    /// to rebuild from scratch.
    pub fn load_config<I, P>(&mut self, paths: I) -> ConfigResult<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.source_paths = paths.into_iter().map(Into::into).collect();

        for path in self.source_paths.clone() {
            let parsed = self.load_config_file(&path)?;
            self.merged = shallow_merge(std::mem::take(&mut self.merged), parsed);
        }

        Ok(())
    }

    /// Fetch the value at the end of a key chain.
    ///
    /// Walks the merged mapping one key at a time, descending into nested
    /// mappings. An empty chain returns the full merged mapping. Fails
    /// with [`ConfigError::KeyNotFound`] naming the first key that does
    /// not exist at its depth.
    pub fn fetch(&self, keys: &[&str]) -> ConfigResult<&Value> {
        let mut current = &self.merged;
        for key in keys {
            current = current
                .as_object()
                .and_then(|map| map.get(*key))
                .ok_or_else(|| ConfigError::KeyNotFound {
                    key: (*key).to_string(),
                })?;
        }
        Ok(current)
    }

    /// Fetch the value at the end of a key chain and deserialize it.
    ///
    /// Fails with [`ConfigError::Deserialize`] when the value does not
    /// match the requested type.
    pub fn fetch_as<T: DeserializeOwned>(&self, keys: &[&str]) -> ConfigResult<T> {
        let value = self.fetch(keys)?;
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Flush, then load the currently remembered source paths again.
    ///
    /// The flush invalidates the cache entries for those paths, so the
    /// files are re-read from disk for this cycle.
    pub fn reload_config(&mut self) -> ConfigResult<()> {
        self.flush();

        let paths = std::mem::take(&mut self.source_paths);
        self.load_config(paths)
    }

    /// Invalidate the cache entries for the current source paths (when
    /// caching is enabled) and empty the merged mapping.
    ///
    /// The mapping is cleared unconditionally, regardless of cache usage.
    pub fn flush(&mut self) {
        if self.use_cache {
            for path in &self.source_paths {
                self.cache.delete(path);
            }
        }
        self.merged = Value::Object(Map::new());
    }

    /// Load a single file's parsed mapping, consulting the cache first.
    ///
    /// A non-empty cached mapping is returned without touching the file;
    /// an empty one counts as a miss. On a miss the file is read, parsed,
    /// and (when caching is enabled) stored back best-effort.
    fn load_config_file(&self, path: &Path) -> ConfigResult<Value> {
        if self.use_cache
            && let Some(cached) = self.cache.fetch(path)
            && cached.as_object().is_some_and(|map| !map.is_empty())
        {
            debug!(path = %path.display(), "config served from cache");
            return Ok(cached);
        }

        if !path.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.to_path_buf(),
        })?;

        // Parsing straight into a map enforces a mapping at the root.
        let map: Map<String, Value> =
            serde_yaml::from_str(&content).map_err(|err| ConfigError::InvalidConfigFile {
                path: path.to_path_buf(),
                line: err.location().map_or(0, |loc| loc.line()),
            })?;
        let parsed = Value::Object(map);
        debug!(path = %path.display(), "parsed config file");

        if self.use_cache {
            self.cache.store(path, parsed.clone());
        }

        Ok(parsed)
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("source_paths", &self.source_paths)
            .field("use_cache", &self.use_cache)
            .finish_non_exhaustive()
    }
}
