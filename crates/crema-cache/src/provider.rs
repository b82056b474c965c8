//! Cache provider trait.

use async_trait::async_trait;

use crate::error::CacheResult;

/// Key-value cache for small string values (tokens, preferences).
///
/// Implementations must be thread-safe. All operations are async so file
/// and in-memory providers share one contract. The store treats values as
/// opaque strings; nothing here interprets a token.
#[async_trait]
pub trait CacheProvider: Send + Sync {
    /// Gets a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Sets a value in the cache.
    async fn set(&self, key: &str, value: &str) -> CacheResult<()>;

    /// Deletes a value from the cache.
    ///
    /// Returns `Ok(())` even if the key doesn't exist.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Checks if a key exists in the cache.
    async fn exists(&self, key: &str) -> CacheResult<bool>;

    /// Clears all keys in the cache.
    async fn clear(&self) -> CacheResult<()>;
}
