//! File-based storage provider
//!
//! Persists key-value pairs as a JSON object in a single file under the
//! platform config directory, with an in-memory cache in front of it.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use directories::ProjectDirs;

use crate::ports::outbound::StorageProvider;

/// Storage provider backed by a JSON file
///
/// All clones share the same cache and write to the same file.
#[derive(Clone)]
pub struct FileStorageProvider {
    storage_path: PathBuf,
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for FileStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorageProvider {
    /// Create a provider at the platform config location
    ///
    /// Falls back to a file in the working directory when no config
    /// directory can be resolved for the platform.
    pub fn new() -> Self {
        let storage_path = ProjectDirs::from("io", "scenarium", "player")
            .map(|dirs| dirs.config_dir().join("storage.json"))
            .unwrap_or_else(|| PathBuf::from("scenarium_storage.json"));

        Self::with_path(storage_path)
    }

    /// Create a provider over an explicit file path
    pub fn with_path(storage_path: PathBuf) -> Self {
        let cache = Self::load_cache(&storage_path);

        tracing::debug!("File storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Read the storage file into a map, treating damage as empty storage.
    fn load_cache(path: &Path) -> HashMap<String, String> {
        if !path.exists() {
            return HashMap::new();
        }

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to read storage file: {}", e);
                return HashMap::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse storage file: {}", e);
            HashMap::new()
        })
    }

    /// Persist the cache to disk
    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory: {}", e);
                return;
            }
        }

        // Serialize under the read lock, write the file after releasing it.
        let serialized = serde_json::to_string_pretty(&*self.read_cache());
        match serialized {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => tracing::error!("Failed to serialize storage data: {}", e),
        }
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        match self.cache.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        match self.cache.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl StorageProvider for FileStorageProvider {
    fn save(&self, key: &str, value: &str) {
        self.write_cache().insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn load(&self, key: &str) -> Option<String> {
        self.read_cache().get(key).cloned()
    }

    fn remove(&self, key: &str) {
        self.write_cache().remove(key);
        self.persist();
    }
}
