//! Token refresh coordination.
//!
//! Refresh runs single-flight: attempts are serialized through a
//! `tokio::sync::Mutex`, and every caller carries the token generation
//! it observed when it decided a refresh was needed. Whoever wins the
//! lock performs the network call; everyone queued behind it finds the
//! generation advanced and reuses the fresh token. N concurrent 401s
//! therefore produce exactly one refresh request, and all waiters share
//! its outcome.
//!
//! A failed refresh is terminal: the session is cleared, `token_invalid`
//! is set, and no retry loop is entered.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crema_core::event::{Event, EventOutcome, EventType};

use crate::error::{SessionError, SessionResult};
use crate::events::SessionEvent;
use crate::store::SessionStore;

impl SessionStore {
    /// Refreshes the access token, deduplicating concurrent attempts.
    ///
    /// Returns the access token that is current once the call completes,
    /// which may have been minted by another caller's refresh.
    pub async fn refresh(&self) -> SessionResult<String> {
        let observed = self.inner.read().await.generation();
        self.refresh_from(observed).await
    }

    /// Refreshes only if the token generation still matches `observed`.
    pub(crate) async fn refresh_from(&self, observed: u64) -> SessionResult<String> {
        let _flight = self.refresh_flight.lock().await;

        {
            let session = self.inner.read().await;
            if session.generation() != observed {
                // Someone refreshed, or the session was cleared, while we
                // waited for the lock.
                return session
                    .access_token
                    .clone()
                    .ok_or(SessionError::SessionExpired);
            }
        }

        let refresh_token = {
            let session = self.inner.read().await;
            match &session.refresh_token {
                Some(token) => token.clone(),
                None => return Err(SessionError::SessionExpired),
            }
        };

        match self.api.refresh(&refresh_token).await {
            Ok(response) => {
                let pair = response.into_pair();
                self.install_tokens(&pair).await?;
                let _ = self.events.send(SessionEvent::TokenRefreshed);
                Event::new(EventType::RefreshToken, EventOutcome::Success).emit();
                Ok(pair.access)
            }
            Err(err) => {
                tracing::warn!("token refresh failed: {err}");
                Event::new(EventType::RefreshTokenError, EventOutcome::Failure)
                    .with_detail(err.to_string())
                    .emit();
                self.invalidate().await;
                Err(SessionError::SessionExpired)
            }
        }
    }
}

/// Spawns the interval-based refresh task.
///
/// While the session holds a refresh token, the access token is renewed
/// every `period`. Ticks without a refresh token are skipped, so the
/// task idles cheaply when signed out. Abort the returned handle to stop
/// the task at teardown.
pub fn spawn_periodic(store: Arc<SessionStore>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of an interval completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if !store.has_refresh_token().await {
                continue;
            }
            if let Err(err) = store.refresh().await {
                // Terminal: invalidate() already cleared the tokens, so
                // the next ticks fall through the guard above.
                tracing::warn!("periodic token refresh failed: {err}");
            }
        }
    })
}
