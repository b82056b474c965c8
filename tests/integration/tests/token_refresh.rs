//! Token refresh: silent retry on 401, single-flight, terminal failure,
//! and the interval-based trigger.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use crema_cache::{keys, CacheProvider};
use crema_client::StorefrontBackend;
use crema_session::{spawn_periodic, SessionError, SessionEvent};

use common::{FakeApi, TestEnv};

/// Runs a profile fetch through `with_auth`, as any API call would.
async fn authed_profile_fetch(env: &TestEnv) -> Result<String, SessionError> {
    let api = Arc::clone(&env.api);
    env.store
        .with_auth(move |token| {
            let api = Arc::clone(&api);
            async move { api.profile(&token).await.map(|user| user.email) }
        })
        .await
}

#[tokio::test]
async fn expired_access_token_is_refreshed_silently() {
    let env = TestEnv::new(FakeApi::new("user@example.com", "abcdef12"));
    env.store.login("user@example.com", "abcdef12").await.unwrap();

    let mut events = env.store.subscribe();

    // The access token dies server-side; the next call sees a 401
    env.api.expire_access_tokens().await;

    let email = authed_profile_fetch(&env).await.unwrap();
    assert_eq!(email, "user@example.com");
    assert_eq!(env.api.refresh_calls.load(Ordering::SeqCst), 1);

    // The rotation was announced out-of-band
    assert_eq!(events.try_recv().unwrap(), SessionEvent::TokenRefreshed);

    // The rotated token is in the store and mirrored to the cache
    let session = env.store.snapshot().await;
    assert_eq!(
        session.access_token.as_deref(),
        Some(env.api.latest_access_token().as_str())
    );
    assert_eq!(
        env.cache.get(keys::ACCESS_TOKEN).await.unwrap(),
        session.access_token
    );
}

#[tokio::test]
async fn concurrent_401s_share_one_refresh() {
    let env = Arc::new(TestEnv::new(FakeApi::new("user@example.com", "abcdef12")));
    env.store.login("user@example.com", "abcdef12").await.unwrap();
    env.api.expire_access_tokens().await;

    let mut handles = Vec::new();
    for _ in 0..10 {
        let env = Arc::clone(&env);
        handles.push(tokio::spawn(async move {
            authed_profile_fetch(&env).await
        }));
    }

    for handle in handles {
        let email = handle.await.unwrap().unwrap();
        assert_eq!(email, "user@example.com");
    }

    // Ten failing calls, exactly one refresh on the network
    assert_eq!(env.api.refresh_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn invalid_refresh_token_clears_the_session() {
    let env = TestEnv::new(FakeApi::new("user@example.com", "abcdef12"));
    env.store.login("user@example.com", "abcdef12").await.unwrap();

    let mut events = env.store.subscribe();

    env.api.expire_access_tokens().await;
    env.api.revoke_refresh_tokens().await;

    let err = authed_profile_fetch(&env).await.expect_err("refresh must fail");
    assert!(matches!(err, SessionError::SessionExpired));

    let session = env.store.snapshot().await;
    assert!(session.token_invalid);
    assert!(!session.is_authenticated());
    assert!(session.user.is_none());
    assert!(!env.cache.exists(keys::REFRESH_TOKEN).await.unwrap());

    assert_eq!(events.try_recv().unwrap(), SessionEvent::RefreshFailed);

    // Terminal: no retry loop happened
    assert_eq!(env.api.refresh_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn refresh_waiters_fail_together_when_refresh_fails() {
    let env = Arc::new(TestEnv::new(FakeApi::new("user@example.com", "abcdef12")));
    env.store.login("user@example.com", "abcdef12").await.unwrap();
    env.api.expire_access_tokens().await;
    env.api.revoke_refresh_tokens().await;

    let mut handles = Vec::new();
    for _ in 0..6 {
        let env = Arc::clone(&env);
        handles.push(tokio::spawn(async move {
            authed_profile_fetch(&env).await
        }));
    }

    for handle in handles {
        let result = handle.await.unwrap();
        assert!(matches!(result, Err(SessionError::SessionExpired)));
    }
    assert_eq!(env.api.refresh_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn interval_trigger_refreshes_while_signed_in() {
    let env = TestEnv::new(FakeApi::new("user@example.com", "abcdef12"));
    env.store.login("user@example.com", "abcdef12").await.unwrap();

    let handle = spawn_periodic(Arc::clone(&env.store), Duration::from_secs(600));

    // Two periods pass
    tokio::time::sleep(Duration::from_secs(1250)).await;
    handle.abort();

    assert!(env.api.refresh_calls.load(Ordering::SeqCst) >= 2);
    let session = env.store.snapshot().await;
    assert_eq!(
        session.access_token.as_deref(),
        Some(env.api.latest_access_token().as_str())
    );
}

#[tokio::test(start_paused = true)]
async fn interval_trigger_idles_when_signed_out() {
    let env = TestEnv::new(FakeApi::new("user@example.com", "abcdef12"));

    let handle = spawn_periodic(Arc::clone(&env.store), Duration::from_secs(600));
    tokio::time::sleep(Duration::from_secs(1250)).await;
    handle.abort();

    assert_eq!(env.api.refresh_calls.load(Ordering::SeqCst), 0);
}
