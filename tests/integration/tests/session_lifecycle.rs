//! Session lifecycle: login, profile, logout, hydration, admin mode.

mod common;

use anyhow::Result;

use crema_cache::{keys, CacheProvider};
use crema_model::RegisterRequest;
use crema_session::SessionError;

use common::{FakeApi, TestEnv};

#[tokio::test]
async fn login_stores_matching_tokens_in_store_and_cache() -> Result<()> {
    let env = TestEnv::new(FakeApi::new("user@example.com", "abcdef12"));

    env.store.login("user@example.com", "abcdef12").await?;

    let session = env.store.snapshot().await;
    assert_eq!(
        session.user.as_ref().map(|u| u.email.as_str()),
        Some("user@example.com")
    );
    let in_store = session.access_token.expect("access token in store");
    let in_cache = env
        .cache
        .get(keys::ACCESS_TOKEN)
        .await?
        .expect("access token in cache");
    assert_eq!(in_store, in_cache);
    assert!(!session.loading);
    Ok(())
}

#[tokio::test]
async fn profile_is_fetched_exactly_once_after_login() -> Result<()> {
    let env = TestEnv::new(FakeApi::new("user@example.com", "abcdef12"));

    env.store.login("user@example.com", "abcdef12").await?;
    env.store.fetch_profile().await?;
    env.store.fetch_profile().await?;

    assert_eq!(
        env.api
            .profile_calls
            .load(std::sync::atomic::Ordering::SeqCst),
        1
    );
    let session = env.store.snapshot().await;
    assert!(session.user.is_some());
    assert!(!session.loading);
    Ok(())
}

#[tokio::test]
async fn malformed_email_is_rejected_before_the_network() {
    let env = TestEnv::new(FakeApi::new("user@example.com", "abcdef12"));

    let err = env
        .store
        .login("foo@bar", "abcdef12")
        .await
        .expect_err("malformed email must fail");
    match err {
        SessionError::Validation(errors) => {
            assert_eq!(errors[0].field, "email");
            assert_eq!(errors[0].message, "Invalid email format");
        }
        other => panic!("expected a field error, got {other:?}"),
    }
    assert!(!env.store.is_authenticated().await);
}

#[tokio::test]
async fn wrong_credentials_yield_the_generic_message() {
    let env = TestEnv::new(FakeApi::new("user@example.com", "abcdef12"));

    let err = env
        .store
        .login("user@example.com", "wrong-pass1")
        .await
        .expect_err("wrong password must fail");
    assert_eq!(err.to_string(), "invalid email or password");
}

#[tokio::test]
async fn logout_clears_cache_and_reload_stays_signed_out() -> Result<()> {
    let env = TestEnv::new(FakeApi::new("user@example.com", "abcdef12"));

    env.store.login("user@example.com", "abcdef12").await?;
    env.store.logout().await?;

    assert!(!env.cache.exists(keys::ACCESS_TOKEN).await?);
    assert!(!env.cache.exists(keys::REFRESH_TOKEN).await?);

    // Simulated process restart over the same cache
    let restarted = env.restarted_store();
    restarted.hydrate().await?;
    assert!(!restarted.is_authenticated().await);
    assert!(restarted.snapshot().await.user.is_none());
    Ok(())
}

#[tokio::test]
async fn reload_restores_a_live_session() -> Result<()> {
    let env = TestEnv::new(FakeApi::new("user@example.com", "abcdef12"));

    env.store.login("user@example.com", "abcdef12").await?;

    let restarted = env.restarted_store();
    restarted.hydrate().await?;

    let session = restarted.snapshot().await;
    assert!(session.is_authenticated());
    assert_eq!(
        session.user.as_ref().map(|u| u.email.as_str()),
        Some("user@example.com")
    );
    Ok(())
}

#[tokio::test]
async fn registration_does_not_log_in_and_surfaces_server_field_errors() -> Result<()> {
    let env = TestEnv::new(FakeApi::new("taken@example.com", "abcdef12"));

    // Fresh email: account created, still signed out
    let request = RegisterRequest::new("new@example.com", "abcdef12");
    env.store.register(&request).await?;
    assert!(!env.store.is_authenticated().await);

    // Taken email: the server's per-field error comes through
    let request = RegisterRequest::new("taken@example.com", "abcdef12");
    let err = env.store.register(&request).await.expect_err("email taken");
    match err {
        SessionError::Validation(errors) => {
            assert_eq!(errors[0].field, "email");
            assert_eq!(errors[0].message, "Email already taken");
        }
        other => panic!("expected a field error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn allow_listed_email_enters_and_leaves_admin_mode() -> Result<()> {
    let env = TestEnv::with_admin_emails(
        FakeApi::new("owner@crema.shop", "abcdef12"),
        vec!["Owner@Crema.Shop".to_string()],
    );

    env.store.login("owner@crema.shop", "abcdef12").await?;
    assert!(env.store.snapshot().await.admin_mode);

    // Leaving the admin area keeps the session alive
    env.store.set_admin_mode(false).await?;
    let session = env.store.snapshot().await;
    assert!(!session.admin_mode);
    assert!(session.is_authenticated());
    assert!(session.user.is_some());

    env.store.set_admin_mode(true).await?;
    assert!(env.store.snapshot().await.admin_mode);
    Ok(())
}

#[tokio::test]
async fn admin_role_elevates_and_customers_are_refused() -> Result<()> {
    let env = TestEnv::new(FakeApi::new("staff@example.com", "abcdef12").with_admin_role());
    env.store.login("staff@example.com", "abcdef12").await?;
    assert!(env.store.snapshot().await.admin_mode);

    let env = TestEnv::new(FakeApi::new("user@example.com", "abcdef12"));
    env.store.login("user@example.com", "abcdef12").await?;
    assert!(!env.store.snapshot().await.admin_mode);
    let err = env
        .store
        .set_admin_mode(true)
        .await
        .expect_err("customer must not enter admin mode");
    assert!(matches!(err, SessionError::Forbidden));
    Ok(())
}
