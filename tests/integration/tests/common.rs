//! Common test utilities and fixtures.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crema_cache::MemoryCache;
use crema_client::{ClientError, ClientResult, StorefrontBackend};
use crema_core::config::SessionConfig;
use crema_core::FieldError;
use crema_model::{
    Credentials, GoogleLoginRequest, RegisterRequest, TokenResponse, UserProfile, UserRole,
};
use crema_session::SessionStore;

/// How long the fake refresh endpoint stays in flight, so concurrent
/// 401 handlers actually overlap.
const REFRESH_LATENCY: Duration = Duration::from_millis(20);

/// In-memory storefront API with one account.
///
/// Tokens are numbered strings; issued tokens stay valid until the test
/// expires or revokes them, which is how token expiry mid-session is
/// simulated.
pub struct FakeApi {
    email: String,
    password: String,
    role: UserRole,
    counter: AtomicU32,
    valid_access: Mutex<HashSet<String>>,
    valid_refresh: Mutex<HashSet<String>>,
    /// Number of refresh calls that reached the network.
    pub refresh_calls: AtomicUsize,
    /// Number of profile fetches that reached the network.
    pub profile_calls: AtomicUsize,
}

impl FakeApi {
    /// Creates a fake with a single registered account.
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            role: UserRole::Customer,
            counter: AtomicU32::new(0),
            valid_access: Mutex::new(HashSet::new()),
            valid_refresh: Mutex::new(HashSet::new()),
            refresh_calls: AtomicUsize::new(0),
            profile_calls: AtomicUsize::new(0),
        }
    }

    /// Marks the account as an administrator.
    pub fn with_admin_role(mut self) -> Self {
        self.role = UserRole::Admin;
        self
    }

    async fn issue(&self) -> TokenResponse {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let access = format!("access-{n}");
        let refresh = format!("refresh-{n}");
        self.valid_access.lock().await.insert(access.clone());
        self.valid_refresh.lock().await.insert(refresh.clone());
        TokenResponse {
            access_token: access,
            refresh_token: refresh,
            expires_in: Some(300),
        }
    }

    /// Invalidates every issued access token, as if they all expired.
    pub async fn expire_access_tokens(&self) {
        self.valid_access.lock().await.clear();
    }

    /// Invalidates every issued refresh token.
    pub async fn revoke_refresh_tokens(&self) {
        self.valid_refresh.lock().await.clear();
    }

    /// The access token most recently issued.
    pub fn latest_access_token(&self) -> String {
        format!("access-{}", self.counter.load(Ordering::SeqCst))
    }
}

#[async_trait]
impl StorefrontBackend for FakeApi {
    async fn login(&self, credentials: &Credentials) -> ClientResult<TokenResponse> {
        if credentials.email == self.email && credentials.password == self.password {
            Ok(self.issue().await)
        } else {
            Err(ClientError::Unauthorized)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        if request.email == self.email {
            Err(ClientError::Validation(vec![FieldError::new(
                "email",
                "Email already taken",
            )]))
        } else {
            Ok(())
        }
    }

    async fn login_google(&self, _request: &GoogleLoginRequest) -> ClientResult<TokenResponse> {
        Ok(self.issue().await)
    }

    async fn refresh(&self, refresh_token: &str) -> ClientResult<TokenResponse> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(REFRESH_LATENCY).await;
        if self.valid_refresh.lock().await.contains(refresh_token) {
            Ok(self.issue().await)
        } else {
            Err(ClientError::Unauthorized)
        }
    }

    async fn profile(&self, access_token: &str) -> ClientResult<UserProfile> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        if self.valid_access.lock().await.contains(access_token) {
            Ok(UserProfile::new(self.email.clone()).with_role(self.role))
        } else {
            Err(ClientError::Unauthorized)
        }
    }

    async fn request_password_reset(&self, _email: &str) -> ClientResult<()> {
        Ok(())
    }
}

/// Test environment wiring a store to the fake API and a shared cache.
pub struct TestEnv {
    /// The fake storefront API.
    pub api: Arc<FakeApi>,
    /// The cache shared by every store built from this environment.
    pub cache: Arc<MemoryCache>,
    /// The session store under test.
    pub store: Arc<SessionStore>,
}

impl TestEnv {
    /// Creates an environment with no admin allow-list.
    pub fn new(api: FakeApi) -> Self {
        Self::with_admin_emails(api, Vec::new())
    }

    /// Creates an environment with the given admin allow-list.
    pub fn with_admin_emails(api: FakeApi, admin_emails: Vec<String>) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("crema=debug")
            .try_init();

        let api = Arc::new(api);
        let cache = Arc::new(MemoryCache::new());
        let store = Arc::new(SessionStore::new(
            Arc::clone(&api) as Arc<dyn StorefrontBackend>,
            Arc::clone(&cache) as Arc<dyn crema_cache::CacheProvider>,
            SessionConfig {
                refresh_interval_secs: 600,
                admin_emails,
            },
        ));

        Self { api, cache, store }
    }

    /// Builds a second store over the same cache and backend, as a
    /// process restart would.
    pub fn restarted_store(&self) -> Arc<SessionStore> {
        Arc::new(SessionStore::new(
            Arc::clone(&self.api) as Arc<dyn StorefrontBackend>,
            Arc::clone(&self.cache) as Arc<dyn crema_cache::CacheProvider>,
            SessionConfig::default(),
        ))
    }
}
