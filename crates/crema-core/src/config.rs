//! Configuration for the crema storefront client.
//!
//! Plain data; loading from a file or environment lives in the consuming
//! binary.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure for the storefront client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// REST API configuration.
    pub api: ApiConfig,
    /// Session and refresh configuration.
    pub session: SessionConfig,
    /// Local cache configuration.
    pub cache: CacheConfig,
}

/// REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the storefront API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Session and token refresh configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Period of the background token refresh, in seconds.
    pub refresh_interval_secs: u64,

    /// Emails eligible for the admin area, compared trimmed and
    /// case-insensitively.
    ///
    /// UI convenience only. The server authorizes every admin request
    /// on its own; nothing here grants access to anything.
    pub admin_emails: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 600,
            admin_emails: Vec::new(),
        }
    }
}

/// Local cache configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Path of the cache file. `None` selects an in-memory cache.
    pub path: Option<PathBuf>,
}
