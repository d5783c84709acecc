//! REST API client for the affiliate backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: [`HttpApi`] returns
//! [`ApiError::Unavailable`] since these endpoints are only reachable from
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Callers in `state` decide how a
//! failure degrades (boolean result, logout, inline message) so nothing here
//! panics or logs.
//!
//! CREDENTIALS
//! ===========
//! Authenticated calls take a [`BearerToken`] argument. There is no shared
//! default header, so dropping the session token is enough to stop sending
//! credentials.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{AffiliateStats, Charity, ClickRequest, Product, User};
use crate::config::ApiConfig;

pub const TOKEN_ENDPOINT: &str = "/auth/token";
pub const REGISTER_ENDPOINT: &str = "/auth/register";
pub const ME_ENDPOINT: &str = "/auth/me";
pub const SEARCH_ENDPOINT: &str = "/search/products";
pub const PUBLIC_SEARCH_ENDPOINT: &str = "/search/public/products";
pub const CLICK_ENDPOINT: &str = "/affiliate/click";
pub const STATS_ENDPOINT: &str = "/affiliate/stats";
pub const CHARITIES_ENDPOINT: &str = "/affiliate/charities";

/// Failure talking to the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Whether the backend rejected the credential.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Status(401 | 403))
    }
}

/// Opaque bearer credential.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

/// Pick the search endpoint for the session's authentication state.
#[must_use]
pub fn search_endpoint(authenticated: bool) -> &'static str {
    if authenticated { SEARCH_ENDPOINT } else { PUBLIC_SEARCH_ENDPOINT }
}

/// Password-grant form body for `/auth/token`. The email goes in `username`.
#[must_use]
pub fn token_form_body(email: &str, password: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("username", email)
        .append_pair("password", password)
        .finish()
}

/// Operations the UI needs from the backend.
#[async_trait(?Send)]
pub trait AffiliateApi {
    /// Exchange credentials for a bearer token.
    async fn request_token(&self, email: &str, password: &str) -> Result<BearerToken, ApiError>;

    /// Create an account. The response body is not used.
    async fn register(&self, email: &str, password: &str) -> Result<(), ApiError>;

    /// Identify the owner of `token`.
    async fn current_user(&self, token: &BearerToken) -> Result<User, ApiError>;

    /// Search products; `token` selects the authenticated endpoint.
    async fn search_products(&self, query: &str, token: Option<&BearerToken>) -> Result<Vec<Product>, ApiError>;

    /// Record an affiliate click. The response body is not used.
    async fn record_click(&self, token: &BearerToken, click: &ClickRequest) -> Result<(), ApiError>;

    async fn affiliate_stats(&self, token: &BearerToken) -> Result<AffiliateStats, ApiError>;

    async fn charities(&self) -> Result<Vec<Charity>, ApiError>;
}

/// [`AffiliateApi`] over `fetch` in the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(ApiConfig::from_build_env())
    }
}

#[cfg(feature = "hydrate")]
mod fetch {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{ApiError, BearerToken};

    pub fn authorized(builder: RequestBuilder, token: Option<&BearerToken>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &token.header_value()),
            None => builder,
        }
    }

    pub async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
        let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp)
    }

    pub async fn json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl AffiliateApi for HttpApi {
    async fn request_token(&self, email: &str, password: &str) -> Result<BearerToken, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.config.url(TOKEN_ENDPOINT))
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(token_form_body(email, password));
            let resp = fetch::send(request).await?;
            let body: super::types::TokenResponse = fetch::json(resp).await?;
            Ok(BearerToken::new(body.access_token))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = super::types::RegisterRequest { email, password };
            let request = gloo_net::http::Request::post(&self.config.url(REGISTER_ENDPOINT)).json(&payload);
            fetch::send(request).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn current_user(&self, token: &BearerToken) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::get(&self.config.url(ME_ENDPOINT));
            let resp = fetch::send(fetch::authorized(builder, Some(token)).build()).await?;
            fetch::json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn search_products(&self, query: &str, token: Option<&BearerToken>) -> Result<Vec<Product>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.url(search_endpoint(token.is_some()));
            let builder = gloo_net::http::Request::get(&url).query([("query", query)]);
            let resp = fetch::send(fetch::authorized(builder, token).build()).await?;
            fetch::json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (query, token);
            Err(ApiError::Unavailable)
        }
    }

    async fn record_click(&self, token: &BearerToken, click: &ClickRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::post(&self.config.url(CLICK_ENDPOINT));
            fetch::send(fetch::authorized(builder, Some(token)).json(click)).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, click);
            Err(ApiError::Unavailable)
        }
    }

    async fn affiliate_stats(&self, token: &BearerToken) -> Result<AffiliateStats, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::get(&self.config.url(STATS_ENDPOINT));
            let resp = fetch::send(fetch::authorized(builder, Some(token)).build()).await?;
            fetch::json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn charities(&self) -> Result<Vec<Charity>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.config.url(CHARITIES_ENDPOINT)).build();
            let resp = fetch::send(request).await?;
            fetch::json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
