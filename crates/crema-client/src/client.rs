//! HTTP client for the storefront REST API.

use std::time::Duration;

use serde::Deserialize;

use crema_core::config::ApiConfig;
use crema_core::FieldError;

use crate::error::{ClientError, ClientResult};

/// Backoff before the single retry of a rate-limited request.
const RATE_LIMIT_BACKOFF: Duration = Duration::from_millis(500);

/// API client for making requests to the storefront server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new API client from configuration.
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Creates a new API client for a base URL with default settings.
    pub fn from_base_url(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::new(&ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    /// Gets the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request, retrying once after a fixed backoff if the server
    /// answers 429.
    async fn send(&self, builder: reqwest::RequestBuilder) -> ClientResult<reqwest::Response> {
        let retry = builder.try_clone();
        let response = builder.send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            if let Some(retry) = retry {
                tokio::time::sleep(RATE_LIMIT_BACKOFF).await;
                return Ok(retry.send().await?);
            }
        }

        Ok(response)
    }

    /// Makes a GET request.
    pub async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.send(self.client.get(self.url(path))).await?;
        handle_response(response).await
    }

    /// Makes a GET request with query parameters.
    pub async fn get_with_query<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<T> {
        let response = self
            .send(self.client.get(self.url(path)).query(query))
            .await?;
        handle_response(response).await
    }

    /// Makes a bearer-authorized GET request.
    pub async fn get_auth<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> ClientResult<T> {
        let response = self
            .send(self.client.get(self.url(path)).bearer_auth(token))
            .await?;
        handle_response(response).await
    }

    /// Makes a POST request.
    pub async fn post<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.send(self.client.post(self.url(path)).json(body)).await?;
        handle_response(response).await
    }

    /// Makes a POST request without a response body.
    pub async fn post_no_response<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        let response = self.send(self.client.post(self.url(path)).json(body)).await?;
        handle_empty_response(response).await
    }

    /// Makes a bearer-authorized POST request.
    pub async fn post_auth<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .send(self.client.post(self.url(path)).bearer_auth(token).json(body))
            .await?;
        handle_response(response).await
    }

    /// Makes a bearer-authorized PUT request without a response body.
    pub async fn put_auth_no_response(&self, path: &str, token: &str) -> ClientResult<()> {
        let response = self
            .send(self.client.put(self.url(path)).bearer_auth(token))
            .await?;
        handle_empty_response(response).await
    }

    /// Makes a bearer-authorized DELETE request.
    pub async fn delete_auth(&self, path: &str, token: &str) -> ClientResult<()> {
        let response = self
            .send(self.client.delete(self.url(path)).bearer_auth(token))
            .await?;
        handle_empty_response(response).await
    }
}

/// Wire form of a field-error payload from 400/422 responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<FieldError>,
    #[serde(default)]
    message: Option<String>,
}

/// Handles a response with a body.
async fn handle_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> ClientResult<T> {
    let status = response.status();

    if status.is_success() {
        response.json().await.map_err(ClientError::Http)
    } else {
        Err(classify_error(status.as_u16(), &body_text(response).await))
    }
}

/// Handles a response without a body.
async fn handle_empty_response(response: reqwest::Response) -> ClientResult<()> {
    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        Err(classify_error(status.as_u16(), &body_text(response).await))
    }
}

async fn body_text(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string())
}

/// Maps a non-success status and body onto the client error taxonomy.
fn classify_error(status: u16, body: &str) -> ClientError {
    match status {
        401 => ClientError::Unauthorized,
        429 => ClientError::RateLimited,
        400 | 422 => {
            if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
                if !parsed.errors.is_empty() {
                    return ClientError::Validation(parsed.errors);
                }
                if let Some(message) = parsed.message {
                    return ClientError::Api { status, message };
                }
            }
            ClientError::Api {
                status,
                message: body.to_string(),
            }
        }
        _ => ClientError::Api {
            status,
            message: body.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_base_url_uses_defaults() {
        let client = ApiClient::from_base_url("http://shop.test").unwrap();
        assert_eq!(client.base_url(), "http://shop.test");
    }

    #[test]
    fn classify_unauthorized() {
        assert!(classify_error(401, "whatever").is_unauthorized());
    }

    #[test]
    fn classify_rate_limited() {
        assert!(classify_error(429, "").is_rate_limited());
    }

    #[test]
    fn classify_field_errors() {
        let body = r#"{"errors":[{"field":"email","message":"Email already taken"}]}"#;
        match classify_error(422, body) {
            ClientError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "email");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn classify_message_only_body() {
        let body = r#"{"message":"Discount code expired"}"#;
        match classify_error(400, body) {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Discount code expired");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn classify_server_error_passes_body_through() {
        match classify_error(500, "boom") {
            ClientError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }
}
