//! API client for communicating with the Cronos REST API.
//!
//! This module provides the `ApiClient` struct for the authentication
//! endpoints and the public tenant lookup. Requests are never retried:
//! every failure goes straight back to the caller.

use std::time::Duration;

use reqwest::{header, Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::models::{AuthResponse, LoginRequest, PublicTenant, RegisterRequest, UserProfile};

use super::{ApiError, Backend};

/// API client for the Cronos service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client rooted at `base_url` (e.g. `http://localhost:8080/api`)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// Create a client with the default request timeout
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        Self::new(base_url, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    /// Build an endpoint URL below the base. Segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    /// Send a request and parse a JSON body of the expected shape.
    async fn send<T: DeserializeOwned>(request: RequestBuilder, what: &str) -> Result<T, ApiError> {
        let response = request
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        let response = Self::check_response(response).await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), what, "Response received");

        serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse {}: {}", what, e)))
    }
}

impl Backend for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let url = self.endpoint(&["auth", "login"])?;
        debug!(%url, "POST login");
        Self::send(self.client.post(url).json(request), "login response").await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let url = self.endpoint(&["auth", "register"])?;
        debug!(%url, "POST register");
        Self::send(self.client.post(url).json(request), "register response").await
    }

    async fn current_user(&self, token: Option<&str>) -> Result<UserProfile, ApiError> {
        let url = self.endpoint(&["auth", "me"])?;
        debug!(%url, authenticated = token.is_some(), "GET current user");
        let mut request = self.client.get(url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Self::send(request, "user profile").await
    }

    async fn public_tenant(&self, slug: &str) -> Result<PublicTenant, ApiError> {
        let url = self.endpoint(&["public", "tenants", slug])?;
        debug!(%url, "GET public tenant");
        Self::send(self.client.get(url), "tenant").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_below_base_path() {
        let client = ApiClient::with_base_url("http://localhost:8080/api").expect("client");
        let url = client.endpoint(&["auth", "login"]).expect("url");
        assert_eq!(url.as_str(), "http://localhost:8080/api/auth/login");

        let client = ApiClient::with_base_url("http://localhost:8080/api/").expect("client");
        let url = client.endpoint(&["auth", "me"]).expect("url");
        assert_eq!(url.as_str(), "http://localhost:8080/api/auth/me");
    }

    #[test]
    fn test_endpoint_encodes_slug() {
        let client = ApiClient::with_base_url("https://cronos.example").expect("client");
        let url = client.endpoint(&["public", "tenants", "a b/c"]).expect("url");
        assert_eq!(url.as_str(), "https://cronos.example/public/tenants/a%20b%2Fc");
    }

    #[test]
    fn test_endpoint_encodes_decoded_slug_once() {
        let client = ApiClient::with_base_url("http://localhost:8080/api").expect("client");
        let url = client.endpoint(&["public", "tenants", "café"]).expect("url");
        assert_eq!(url.as_str(), "http://localhost:8080/api/public/tenants/caf%C3%A9");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(
            ApiClient::with_base_url("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            ApiClient::with_base_url("mailto:ops@example.com"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) on localhost is closed on test machines
        let client = ApiClient::new("http://127.0.0.1:9/api", Duration::from_secs(2)).expect("client");
        let err = client.public_tenant("acme").await.unwrap_err();
        assert!(err.is_transport(), "unexpected error: {}", err);
    }
}
