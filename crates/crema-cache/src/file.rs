//! File-backed cache provider.
//!
//! All entries live in a single JSON document, read once at open and
//! rewritten on every change. No cross-process locking; last write wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CacheError, CacheResult};
use crate::provider::CacheProvider;

/// File-backed cache.
#[derive(Debug)]
pub struct FileCache {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileCache {
    /// Opens a cache file, creating parent directories as needed.
    ///
    /// A missing file yields an empty cache; it is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> CacheResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CacheError::Io(e.to_string()))?;
        }

        let entries = if path.exists() {
            let content =
                std::fs::read_to_string(&path).map_err(|e| CacheError::Io(e.to_string()))?;
            serde_json::from_str(&content).map_err(|e| CacheError::Serialization(e.to_string()))?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Gets the default cache file path, `~/.crema/cache.json`.
    pub fn default_path() -> CacheResult<PathBuf> {
        let home = dirs_next::home_dir()
            .ok_or_else(|| CacheError::Configuration("could not determine home directory".to_string()))?;
        Ok(home.join(".crema").join("cache.json"))
    }

    /// Gets the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, String>) -> CacheResult<()> {
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| CacheError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| CacheError::Io(e.to_string()))
    }
}

#[async_trait]
impl CacheProvider for FileCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> CacheResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let mut entries = self.entries.write().await;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }

    async fn exists(&self, key: &str) -> CacheResult<bool> {
        Ok(self.entries.read().await.contains_key(key))
    }

    async fn clear(&self) -> CacheResult<()> {
        let mut entries = self.entries.write().await;
        entries.clear();
        self.persist(&entries)
    }
}
