//! Backend trait for the auth and profile endpoints.
//!
//! The session store depends on this seam rather than on [`ApiClient`]
//! directly, so tests can drive it with an in-memory fake.

use async_trait::async_trait;

use crema_model::{
    Credentials, GoogleLoginRequest, PasswordResetRequest, RefreshRequest, RegisterRequest,
    TokenResponse, UserProfile,
};

use crate::client::ApiClient;
use crate::error::ClientResult;

/// The subset of the storefront API the session layer consumes.
#[async_trait]
pub trait StorefrontBackend: Send + Sync {
    /// Exchanges credentials for a token pair.
    async fn login(&self, credentials: &Credentials) -> ClientResult<TokenResponse>;

    /// Creates an account. Success does not log the user in.
    async fn register(&self, request: &RegisterRequest) -> ClientResult<()>;

    /// Exchanges a Google identity token for a token pair.
    async fn login_google(&self, request: &GoogleLoginRequest) -> ClientResult<TokenResponse>;

    /// Exchanges a refresh token for a new token pair.
    async fn refresh(&self, refresh_token: &str) -> ClientResult<TokenResponse>;

    /// Fetches the profile behind an access token.
    async fn profile(&self, access_token: &str) -> ClientResult<UserProfile>;

    /// Requests a password reset email.
    async fn request_password_reset(&self, email: &str) -> ClientResult<()>;
}

#[async_trait]
impl StorefrontBackend for ApiClient {
    async fn login(&self, credentials: &Credentials) -> ClientResult<TokenResponse> {
        self.post("/auth/login", credentials).await
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        self.post_no_response("/auth/register", request).await
    }

    async fn login_google(&self, request: &GoogleLoginRequest) -> ClientResult<TokenResponse> {
        self.post("/auth/google", request).await
    }

    async fn refresh(&self, refresh_token: &str) -> ClientResult<TokenResponse> {
        let request = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.post("/auth/refresh", &request).await
    }

    async fn profile(&self, access_token: &str) -> ClientResult<UserProfile> {
        self.get_auth("/auth/profile", access_token).await
    }

    async fn request_password_reset(&self, email: &str) -> ClientResult<()> {
        let request = PasswordResetRequest {
            email: email.to_string(),
        };
        self.post_no_response("/auth/password-reset", &request).await
    }
}
