//! Shared HTTP client for the MoimTable REST API.
//!
//! Wraps a [`reqwest::Client`] with the API root and the bearer token store.
//! The per-resource services in [`crate::service`] describe endpoints in terms
//! of the verbs exposed here.
//!
//! Endpoint paths are given as segment lists. Each segment is percent-encoded
//! on its own, so ids and invite codes can never add path levels, a query or
//! a fragment to the request URL.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::config::NetworkConfig;
use crate::error::NetworkError;
use crate::token::TokenStore;

/// HTTP client bound to one API root.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Build a client with the configured timeouts.
    pub fn new(
        config: &NetworkConfig,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Self, NetworkError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;
        Self::with_client(http, &config.base_url, tokens)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    ///
    /// Fails when `base_url` is not an absolute `http(s)` URL.
    pub fn with_client(
        http: reqwest::Client,
        base_url: &str,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Self, NetworkError> {
        let invalid = |reason: String| NetworkError::BaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(invalid("expected an http(s) URL".to_string()));
        }
        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            http,
            base_url: url,
            tokens,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET {path}` and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T, NetworkError> {
        let response = self.request(Method::GET, path).send().await?;
        Self::parse_response(response).await
    }

    /// `GET {path}?{query}` and decode the JSON body.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, NetworkError> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::parse_response(response).await
    }

    /// `POST {path}` with an optional JSON body and decode the JSON reply.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &[&str],
        body: Option<&serde_json::Value>,
    ) -> Result<T, NetworkError> {
        let response = Self::with_body(self.request(Method::POST, path), body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST {path}`, discarding whatever the server replies with.
    pub async fn post_unit(
        &self,
        path: &[&str],
        body: Option<&serde_json::Value>,
    ) -> Result<(), NetworkError> {
        let response = Self::with_body(self.request(Method::POST, path), body)
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// `POST {path}` for endpoints that answer with a bare string.
    ///
    /// Accepts both a JSON string literal and plain text.
    pub async fn post_text(&self, path: &[&str]) -> Result<String, NetworkError> {
        let response = self.request(Method::POST, path).send().await?;
        let text = Self::ensure_success(response).await?.text().await?;
        Ok(serde_json::from_str::<String>(&text).unwrap_or(text))
    }

    /// `PATCH {path}` with a JSON body and decode the JSON reply.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &[&str],
        body: &serde_json::Value,
    ) -> Result<T, NetworkError> {
        let response = self.request(Method::PATCH, path).json(body).send().await?;
        Self::parse_response(response).await
    }

    /// `PATCH {path}` with a multipart form and decode the JSON reply.
    pub async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &[&str],
        form: reqwest::multipart::Form,
    ) -> Result<T, NetworkError> {
        let response = self
            .request(Method::PATCH, path)
            .multipart(form)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE {path}`, discarding the body.
    pub async fn delete(&self, path: &[&str]) -> Result<(), NetworkError> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::check_status(response).await
    }

    // ---- private helpers ----

    /// Append the encoded `path` segments to the API root's own path.
    fn url(&self, path: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `with_client` only accepts URLs that can carry a path.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path);
        }
        url
    }

    fn request(&self, method: Method, path: &[&str]) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(method = %method, url = %url, "Sending API request");

        let builder = self.http.request(method, url);
        match self.tokens.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn with_body(builder: RequestBuilder, body: Option<&serde_json::Value>) -> RequestBuilder {
        match body {
            Some(body) => builder.json(body),
            None => builder,
        }
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`NetworkError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, NetworkError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::debug!(status = status.as_u16(), "API request failed");
            return Err(NetworkError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, NetworkError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), NetworkError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
