// crates/blog-e2e-harness/src/client.rs
// ============================================================================
// Module: Scoped API Client
// Description: HTTP session factory bound to the blog API base URL.
// Purpose: Build per-test clients with fixed headers and timeouts.
// Dependencies: reqwest, serde, tokio, tracing
// ============================================================================

//! ## Overview
//! [`ApiClient`] owns one `reqwest::Client` and therefore one connection
//! pool. Every handle sends `Accept: application/json`; authenticated handles
//! also send `Authorization: Bearer <token>`. Dropping the handle drops the
//! pool, which closes its sockets on every exit path of a test, including
//! `?` propagation and panics.
//!
//! Requests are bounded by a fixed 10 second connect timeout and a 10 second
//! total timeout. Nothing is retried.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::RequestBuilder;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use reqwest::header::AUTHORIZATION;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::multipart::Form;
use reqwest::multipart::Part;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::HarnessConfig;
use crate::error::ClientError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Time allowed to establish a connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Time allowed for a whole request, from connect to the last body byte.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Media type sent in the `Accept` header of every request.
pub const ACCEPT_JSON: &str = "application/json";

// ============================================================================
// SECTION: Client
// ============================================================================

/// Scoped HTTP client for one test.
///
/// # Invariants
/// - `Accept: application/json` is always present in the default headers.
/// - `Authorization` is present only when a non-blank token was supplied.
/// - The connection pool lives exactly as long as this handle.
pub struct ApiClient {
    /// API server root used for relative paths.
    base_url: String,
    /// Headers installed as the client defaults.
    headers: HeaderMap,
    /// Underlying client and its connection pool.
    client: Client,
}

impl ApiClient {
    /// Opens a client against the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when `BASE_URL` is not configured and
    /// [`ClientError::Build`] when the token is not a valid header value or
    /// the transport rejects the settings.
    pub fn open(config: &HarnessConfig, token: Option<&str>) -> Result<Self, ClientError> {
        Self::open_at(config.base_url()?, token)
    }

    /// Opens a client against an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] when the token is not a valid header
    /// value or the transport rejects the settings.
    pub fn open_at(base_url: &str, token: Option<&str>) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
        if let Some(token) = token.filter(|token| !token.trim().is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ClientError::Build("bearer token is not a valid header".into()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        let client = Client::builder()
            .default_headers(headers.clone())
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ClientError::Build(err.to_string()))?;
        let handle = Self {
            base_url: base_url.to_string(),
            headers,
            client,
        };
        debug!(base_url, authenticated = handle.is_authenticated(), "opened api client");
        Ok(handle)
    }

    /// Returns the base URL this client resolves relative paths against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns true when the client sends an `Authorization` header.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.headers.contains_key(AUTHORIZATION)
    }

    /// Resolves a path against the base URL.
    ///
    /// Absolute `http://` and `https://` URLs pass through unchanged.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') { format!("{base}{path}") } else { format!("{base}/{path}") }
    }

    /// Issues a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on connection, timeout, or read failure.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ClientError> {
        self.send(Method::GET, path, |request| request).await
    }

    /// Issues a GET request with URL query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on connection, timeout, or read failure.
    pub async fn get_with_query<Q>(&self, path: &str, query: &Q) -> Result<ApiResponse, ClientError>
    where
        Q: Serialize + ?Sized,
    {
        self.send(Method::GET, path, |request| request.query(query)).await
    }

    /// Issues a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on connection, timeout, or read failure.
    pub async fn post_json<B>(&self, path: &str, body: &B) -> Result<ApiResponse, ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, |request| request.json(body)).await
    }

    /// Issues a POST request without a body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on connection, timeout, or read failure.
    pub async fn post_empty(&self, path: &str) -> Result<ApiResponse, ClientError> {
        self.send(Method::POST, path, |request| request).await
    }

    /// Issues a POST request with a multipart form body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on connection, timeout, or read failure.
    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<ApiResponse, ClientError> {
        self.send(Method::POST, path, |request| request.multipart(form)).await
    }

    /// Issues a PUT request with a multipart form body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on connection, timeout, or read failure.
    pub async fn put_multipart(&self, path: &str, form: Form) -> Result<ApiResponse, ClientError> {
        self.send(Method::PUT, path, |request| request.multipart(form)).await
    }

    /// Issues a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on connection, timeout, or read failure.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ClientError> {
        self.send(Method::DELETE, path, |request| request).await
    }

    /// Releases the client and its connection pool.
    pub fn close(self) {
        drop(self);
    }

    /// Sends a request and reads the full response body.
    async fn send<F>(&self, method: Method, path: &str, build: F) -> Result<ApiResponse, ClientError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.url(path);
        let transport = |source: reqwest::Error| ClientError::Transport {
            method: method.to_string(),
            url: url.clone(),
            source,
        };
        let request = build(self.client.request(method.clone(), &url));
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(transport)?;
        debug!(%method, %url, status = status.as_u16(), "api request completed");
        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

impl Drop for ApiClient {
    fn drop(&mut self) {
        debug!(base_url = %self.base_url, "closing api client");
    }
}

// ============================================================================
// SECTION: Response
// ============================================================================

/// Fully read response of one request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Response status code.
    status: StatusCode,
    /// Response headers.
    headers: HeaderMap,
    /// Full body text.
    body: String,
}

impl ApiResponse {
    /// Returns the status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns true when the status is one of `codes`.
    #[must_use]
    pub fn status_in(&self, codes: &[u16]) -> bool {
        codes.contains(&self.status.as_u16())
    }

    /// Returns the response headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the `Content-Type` header, or an empty string.
    #[must_use]
    pub fn content_type(&self) -> &str {
        self.headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok()).unwrap_or_default()
    }

    /// Returns the raw body text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] with the raw body when decoding fails.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_str(&self.body).map_err(|err| ClientError::Decode {
            status: self.status,
            message: err.to_string(),
            body: self.body.clone(),
        })
    }

    /// Decodes the body as an untyped JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] with the raw body when decoding fails.
    pub fn json_value(&self) -> Result<Value, ClientError> {
        self.json()
    }

    /// Formats `status - body` for assertion messages.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} - {}", self.status.as_u16(), self.body)
    }
}

// ============================================================================
// SECTION: Multipart Helpers
// ============================================================================

/// Builds a multipart file part from a file on disk.
///
/// # Errors
///
/// Returns [`ClientError::Attachment`] when the file cannot be read and
/// [`ClientError::Build`] when `mime` is not a valid media type.
pub async fn file_part(path: &Path, file_name: &str, mime: &str) -> Result<Part, ClientError> {
    let bytes = tokio::fs::read(path).await.map_err(|err| ClientError::Attachment {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime)
        .map_err(|err| ClientError::Build(err.to_string()))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
