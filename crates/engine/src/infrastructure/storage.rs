//! Key-value storage adapters.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use directories::ProjectDirs;

use crate::infrastructure::ports::StorageProvider;

/// Default location of the storage file:
/// - Linux: ~/.config/landfall/storage.json
/// - macOS: ~/Library/Application Support/io.landfall.app/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\landfall\app\config\storage.json
pub fn default_storage_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("io", "landfall", "app") {
        dirs.config_dir().join("storage.json")
    } else {
        // Fallback to current directory if project dirs unavailable
        PathBuf::from("landfall_storage.json")
    }
}

/// File-backed storage.
///
/// Keeps every pair in memory and rewrites the whole JSON file after each
/// mutation. The data set is a few dozen short strings. A failed write is
/// logged and the value stays available for the rest of the session.
pub struct FileStorage {
    storage_path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Open the storage file, loading existing data if it exists.
    ///
    /// An unreadable or corrupt file starts empty; the next write replaces it.
    pub fn open(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = if storage_path.exists() {
            Self::read_file(&storage_path)
        } else {
            HashMap::new()
        };

        tracing::debug!(path = ?storage_path, entries = cache.len(), "Storage opened");

        Self {
            storage_path,
            cache: RwLock::new(cache),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    fn read_file(path: &Path) -> HashMap<String, String> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "Storage file unreadable, starting empty");
                return HashMap::new();
            }
        };
        serde_json::from_str(&data).unwrap_or_else(|e| {
            tracing::warn!(path = ?path, error = %e, "Storage file is not a string map, starting empty");
            HashMap::new()
        })
    }

    fn read_cache(&self) -> Option<RwLockReadGuard<'_, HashMap<String, String>>> {
        match self.cache.read() {
            Ok(guard) => Some(guard),
            Err(e) => {
                tracing::error!(path = ?self.storage_path, error = %e, "Storage cache lock poisoned");
                None
            }
        }
    }

    fn write_cache(&self) -> Option<RwLockWriteGuard<'_, HashMap<String, String>>> {
        match self.cache.write() {
            Ok(guard) => Some(guard),
            Err(e) => {
                tracing::error!(path = ?self.storage_path, error = %e, "Storage cache lock poisoned");
                None
            }
        }
    }

    /// Rewrite the file from the cache.
    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::error!(path = ?parent, error = %e, "Cannot create storage directory");
                    return;
                }
            }
        }

        let Some(cache) = self.read_cache() else {
            return;
        };
        let data = match serde_json::to_string_pretty(&*cache) {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(path = ?self.storage_path, error = %e, "Cannot encode storage");
                return;
            }
        };
        drop(cache);

        if let Err(e) = fs::write(&self.storage_path, data) {
            tracing::error!(path = ?self.storage_path, error = %e, "Storage write failed");
        }
    }
}

impl StorageProvider for FileStorage {
    fn save(&self, key: &str, value: &str) {
        let Some(mut cache) = self.write_cache() else {
            return;
        };
        cache.insert(key.to_string(), value.to_string());
        drop(cache);
        self.persist();
    }

    fn load(&self, key: &str) -> Option<String> {
        self.read_cache()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        let Some(mut cache) = self.write_cache() else {
            return;
        };
        let removed = cache.remove(key).is_some();
        drop(cache);
        if removed {
            self.persist();
        }
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.read_cache()
            .map(|cache| {
                cache
                    .keys()
                    .filter(|key| key.starts_with(prefix))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// In-memory storage for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStorage {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageProvider for MemoryStorage {
    fn save(&self, key: &str, value: &str) {
        match self.values.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
            }
            Err(e) => tracing::error!(error = %e, "Memory storage lock poisoned"),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.values.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!(error = %e, "Memory storage lock poisoned");
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.values.write() {
            Ok(mut guard) => {
                guard.remove(key);
            }
            Err(e) => tracing::error!(error = %e, "Memory storage lock poisoned"),
        }
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        match self.values.read() {
            Ok(guard) => guard
                .keys()
                .filter(|key| key.starts_with(prefix))
                .cloned()
                .collect(),
            Err(e) => {
                tracing::error!(error = %e, "Memory storage lock poisoned");
                Vec::new()
            }
        }
    }
}
