//! Command implementations.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod discount;
pub mod favorites;
pub mod orders;
pub mod status;

pub use auth::{
    run_google_login, run_login, run_logout, run_profile, run_register, run_reset_password,
};
pub use catalog::{run_accessory, run_product};
pub use config::run_config;
pub use discount::run_discount;
pub use favorites::run_favorite;
pub use orders::run_order;
pub use status::run_status;

use std::sync::Arc;

use crema_cache::{CacheProvider, FileCache, MemoryCache};
use crema_client::ApiClient;
use crema_session::SessionStore;

use crate::CliConfig;

/// Shared state handed to every command: the typed API client, the
/// session store, and the persistent cache they share.
pub struct Context {
    /// Typed API client.
    pub api: Arc<ApiClient>,
    /// Session store; owns tokens and admin mode.
    pub store: Arc<SessionStore>,
    /// Persistent cache; tokens plus UI preferences like the currency.
    pub cache: Arc<dyn CacheProvider>,
}

impl Context {
    /// Builds the context from CLI configuration.
    pub fn new(config: &CliConfig, server_override: Option<&str>) -> crate::CliResult<Self> {
        let store_config = config.store_config(server_override)?;

        let api = Arc::new(ApiClient::new(&store_config.api)?);
        let cache: Arc<dyn CacheProvider> = match &store_config.cache.path {
            Some(path) => Arc::new(FileCache::open(path)?),
            None => Arc::new(MemoryCache::new()),
        };
        let store = Arc::new(SessionStore::new(
            Arc::clone(&api) as Arc<dyn crema_client::StorefrontBackend>,
            Arc::clone(&cache),
            store_config.session,
        ));
        Ok(Self { api, store, cache })
    }

    /// Restores the cached session, silently refreshing the tokens.
    pub async fn hydrate(&self) -> crate::CliResult<()> {
        self.store.hydrate().await?;
        Ok(())
    }
}
