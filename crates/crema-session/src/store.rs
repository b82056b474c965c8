//! Session store.
//!
//! The store is the only mutator of session state. It is explicitly
//! owned and injectable: construct it with an API backend, a cache
//! provider, and a [`SessionConfig`], hold it in an `Arc`, and tear it
//! down with [`SessionStore::logout`].

use std::future::Future;
use std::sync::Arc;

use tokio::sync::{broadcast, Mutex, RwLock};

use crema_cache::{keys, CacheProvider};
use crema_client::{ClientError, StorefrontBackend};
use crema_core::config::SessionConfig;
use crema_core::event::{Event, EventOutcome, EventType};
use crema_core::validate;
use crema_model::{Credentials, GoogleLoginRequest, RegisterRequest, TokenPair};

use crate::admin::compute_admin_mode;
use crate::error::{SessionError, SessionResult};
use crate::events::SessionEvent;
use crate::session::Session;

/// Capacity of the session event channel. Subscribers that fall further
/// behind than this lose the oldest events.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Single source of truth for authentication state.
pub struct SessionStore {
    pub(crate) inner: RwLock<Session>,
    pub(crate) api: Arc<dyn StorefrontBackend>,
    pub(crate) cache: Arc<dyn CacheProvider>,
    pub(crate) config: SessionConfig,
    pub(crate) events: broadcast::Sender<SessionEvent>,
    /// Serializes refresh attempts; see [`crate::refresh`].
    pub(crate) refresh_flight: Mutex<()>,
}

impl SessionStore {
    /// Creates a new session store.
    #[must_use]
    pub fn new(
        api: Arc<dyn StorefrontBackend>,
        cache: Arc<dyn CacheProvider>,
        config: SessionConfig,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: RwLock::new(Session::default()),
            api,
            cache,
            config,
            events,
            refresh_flight: Mutex::new(()),
        }
    }

    /// Subscribes to session events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Returns a snapshot of the current session state.
    pub async fn snapshot(&self) -> Session {
        self.inner.read().await.clone()
    }

    /// Whether the session holds an access token.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.is_authenticated()
    }

    /// Whether a refresh token is available.
    pub async fn has_refresh_token(&self) -> bool {
        self.inner.read().await.refresh_token.is_some()
    }

    /// Logs in with email and password.
    ///
    /// The email is validated locally first; malformed input never
    /// reaches the network. On success the tokens are stored and
    /// mirrored into the cache, and the profile is fetched.
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<()> {
        validate::validate_email(email).map_err(|e| SessionError::Validation(vec![e]))?;

        self.set_loading(true).await;
        let response = match self.api.login(&Credentials::new(email, password)).await {
            Ok(response) => response,
            Err(err) => {
                self.set_loading(false).await;
                Event::new(EventType::LoginError, EventOutcome::Failure)
                    .with_user(email)
                    .emit();
                return Err(map_auth_error(err));
            }
        };

        self.complete_login(response.into_pair()).await
    }

    /// Exchanges a Google identity token for a session.
    ///
    /// Same success and failure contract as [`SessionStore::login`].
    pub async fn login_with_google(&self, id_token: &str) -> SessionResult<()> {
        self.set_loading(true).await;
        let request = GoogleLoginRequest {
            id_token: id_token.to_string(),
        };
        let response = match self.api.login_google(&request).await {
            Ok(response) => response,
            Err(err) => {
                self.set_loading(false).await;
                Event::new(EventType::LoginError, EventOutcome::Failure).emit();
                return Err(map_auth_error(err));
            }
        };

        self.complete_login(response.into_pair()).await
    }

    /// Registers a new account.
    ///
    /// All fields are validated locally first and every failure is
    /// reported, per field, before any network call. Success does not
    /// log the user in.
    pub async fn register(&self, request: &RegisterRequest) -> SessionResult<()> {
        let errors = validate::validate_registration(
            &request.email,
            &request.password,
            request.phone.as_deref(),
            request.zip.as_deref(),
        );
        if !errors.is_empty() {
            return Err(SessionError::Validation(errors));
        }

        match self.api.register(request).await {
            Ok(()) => {
                Event::new(EventType::Register, EventOutcome::Success)
                    .with_user(&request.email)
                    .emit();
                Ok(())
            }
            Err(err) => {
                Event::new(EventType::RegisterError, EventOutcome::Failure)
                    .with_user(&request.email)
                    .emit();
                Err(err.into())
            }
        }
    }

    /// Requests a password reset email.
    ///
    /// The outcome message is generic either way, so the response does
    /// not reveal whether the account exists.
    pub async fn request_password_reset(&self, email: &str) -> SessionResult<()> {
        validate::validate_email(email).map_err(|e| SessionError::Validation(vec![e]))?;

        let result = self.api.request_password_reset(email).await;
        Event::new(
            EventType::ResetPassword,
            if result.is_ok() {
                EventOutcome::Success
            } else {
                EventOutcome::Failure
            },
        )
        .emit();
        result.map_err(map_auth_error)
    }

    /// Fetches the profile for the current access token.
    ///
    /// Guarded: a no-op while a fetch is already in flight or once the
    /// profile is populated.
    pub async fn fetch_profile(&self) -> SessionResult<()> {
        {
            let mut session = self.inner.write().await;
            if session.loading || session.user.is_some() {
                return Ok(());
            }
            if session.access_token.is_none() {
                return Err(SessionError::NotSignedIn);
            }
            session.loading = true;
        }

        let api = Arc::clone(&self.api);
        let result = self
            .with_auth(move |token| {
                let api = Arc::clone(&api);
                async move { api.profile(&token).await }
            })
            .await;

        match result {
            Ok(user) => {
                let email = user.email.clone();
                {
                    let mut session = self.inner.write().await;
                    session.apply_user(user, &self.config.admin_emails);
                    session.loading = false;
                }
                Event::new(EventType::FetchProfile, EventOutcome::Success)
                    .with_user(email)
                    .emit();
                Ok(())
            }
            Err(err) => {
                self.set_loading(false).await;
                Err(err)
            }
        }
    }

    /// Logs out: clears all session fields and removes cached tokens.
    pub async fn logout(&self) -> SessionResult<()> {
        let email = {
            let mut session = self.inner.write().await;
            let email = session.user.as_ref().map(|u| u.email.clone());
            session.clear();
            email
        };

        self.cache.delete(keys::ACCESS_TOKEN).await?;
        self.cache.delete(keys::REFRESH_TOKEN).await?;

        let _ = self.events.send(SessionEvent::LoggedOut);
        let mut event = Event::new(EventType::Logout, EventOutcome::Success);
        if let Some(email) = email {
            event = event.with_user(email);
        }
        event.emit();
        Ok(())
    }

    /// Explicitly enters or leaves admin mode.
    ///
    /// Entering requires a populated, eligible profile. Leaving never
    /// touches the rest of the session.
    pub async fn set_admin_mode(&self, enabled: bool) -> SessionResult<()> {
        {
            let mut session = self.inner.write().await;
            if enabled {
                let eligible = session
                    .user
                    .as_ref()
                    .is_some_and(|u| compute_admin_mode(u, &self.config.admin_emails));
                if !eligible {
                    return Err(SessionError::Forbidden);
                }
                session.admin_mode = true;
            } else {
                session.admin_mode = false;
            }
        }

        let _ = self.events.send(SessionEvent::AdminModeChanged(enabled));
        Event::new(
            if enabled {
                EventType::AdminModeEntered
            } else {
                EventType::AdminModeExited
            },
            EventOutcome::Success,
        )
        .emit();
        Ok(())
    }

    /// Hydrates the session from the persistent cache at startup.
    ///
    /// With a cached refresh token present, performs one silent refresh
    /// and a profile fetch. Any failure leaves a signed-out session and
    /// is not reported as an error; the user simply logs in again.
    pub async fn hydrate(&self) -> SessionResult<()> {
        let access = self.cache.get(keys::ACCESS_TOKEN).await?;
        let Some(refresh) = self.cache.get(keys::REFRESH_TOKEN).await? else {
            return Ok(());
        };

        let observed = {
            let mut session = self.inner.write().await;
            session.restore_tokens(access, refresh);
            session.generation()
        };

        if self.refresh_from(observed).await.is_err() {
            return Ok(());
        }
        if let Err(err) = self.fetch_profile().await {
            tracing::debug!("profile fetch after hydration failed: {err}");
        }
        Ok(())
    }

    /// Runs an API operation with the current access token, refreshing
    /// and retrying exactly once on 401.
    ///
    /// Concurrent callers hitting 401 together coalesce onto one refresh
    /// call; see [`crate::refresh`]. If the retried operation is also
    /// rejected, the session is invalidated.
    pub async fn with_auth<T, F, Fut>(&self, op: F) -> SessionResult<T>
    where
        F: Fn(String) -> Fut,
        Fut: Future<Output = crema_client::ClientResult<T>>,
    {
        let (token, observed) = {
            let session = self.inner.read().await;
            match &session.access_token {
                Some(token) => (token.clone(), session.generation()),
                None => return Err(SessionError::NotSignedIn),
            }
        };

        match op(token).await {
            Err(err) if err.is_unauthorized() => {
                let token = self.refresh_from(observed).await?;
                match op(token).await {
                    Err(err) if err.is_unauthorized() => {
                        self.invalidate().await;
                        Err(SessionError::SessionExpired)
                    }
                    other => other.map_err(SessionError::from),
                }
            }
            other => other.map_err(SessionError::from),
        }
    }

    /// Installs a token pair in memory and mirrors it into the cache.
    pub(crate) async fn install_tokens(&self, pair: &TokenPair) -> SessionResult<()> {
        {
            self.inner.write().await.apply_tokens(pair);
        }
        self.cache.set(keys::ACCESS_TOKEN, &pair.access).await?;
        self.cache.set(keys::REFRESH_TOKEN, &pair.refresh).await?;
        Ok(())
    }

    /// Clears the session after a terminal auth failure and drops the
    /// cached tokens. Cache failures are logged, not propagated; the
    /// in-memory state is already gone.
    pub(crate) async fn invalidate(&self) {
        {
            let mut session = self.inner.write().await;
            session.clear();
            session.token_invalid = true;
        }
        if let Err(err) = self.cache.delete(keys::ACCESS_TOKEN).await {
            tracing::warn!("failed to drop cached access token: {err}");
        }
        if let Err(err) = self.cache.delete(keys::REFRESH_TOKEN).await {
            tracing::warn!("failed to drop cached refresh token: {err}");
        }
        let _ = self.events.send(SessionEvent::RefreshFailed);
    }

    async fn set_loading(&self, loading: bool) {
        self.inner.write().await.loading = loading;
    }

    /// Shared tail of the login paths: install tokens, fetch the
    /// profile, derive admin mode.
    async fn complete_login(&self, pair: TokenPair) -> SessionResult<()> {
        self.install_tokens(&pair).await?;

        let user = match self.api.profile(&pair.access).await {
            Ok(user) => user,
            Err(err) => {
                self.set_loading(false).await;
                return Err(err.into());
            }
        };

        let email = user.email.clone();
        let admin = {
            let mut session = self.inner.write().await;
            session.apply_user(user, &self.config.admin_emails);
            session.loading = false;
            session.admin_mode
        };

        if admin {
            let _ = self.events.send(SessionEvent::AdminModeChanged(true));
        }
        let _ = self.events.send(SessionEvent::LoggedIn);
        Event::new(EventType::Login, EventOutcome::Success)
            .with_user(email)
            .emit();
        Ok(())
    }
}

/// Normalizes auth-endpoint failures to the generic credentials message,
/// keeping field-level errors intact.
fn map_auth_error(err: ClientError) -> SessionError {
    match err {
        ClientError::Unauthorized => SessionError::InvalidCredentials,
        ClientError::Validation(errors) => SessionError::Validation(errors),
        ClientError::Api {
            status: 400 | 422, ..
        } => SessionError::InvalidCredentials,
        other => SessionError::Client(other),
    }
}
