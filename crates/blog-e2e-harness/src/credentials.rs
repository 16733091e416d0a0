// crates/blog-e2e-harness/src/credentials.rs
// ============================================================================
// Module: Credential Cache
// Description: Memoized login that yields the bearer token for a test run.
// Purpose: Log in at most once per cache and share the token across tests.
// Dependencies: reqwest, serde, serde_json, tokio, tracing
// ============================================================================

//! ## Overview
//! [`TokenCache`] is the only mutable state shared across tests. It starts
//! empty, is filled by the first successful login, and is never refreshed
//! afterwards; there is no expiry handling. The slot is guarded by an async
//! mutex held across the login request, so tests racing for the first token
//! wait for one login instead of each issuing their own.
//!
//! [`TokenCache::global`] is the process-wide instance used by the default
//! fixtures. Tests that need isolation build their own with
//! [`TokenCache::new`] or clear one with [`TokenCache::reset`].
//!
//! Security posture: the token and password are never logged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::client::ApiClient;
use crate::config::HarnessConfig;
use crate::error::AuthError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Login response fields that may carry the token, in priority order.
pub const TOKEN_KEYS: [&str; 3] = ["access", "token", "access_token"];

/// Statuses accepted from the login endpoint.
const LOGIN_OK_STATUSES: [u16; 2] = [200, 201];

// ============================================================================
// SECTION: Token Extraction
// ============================================================================

/// Returns the first non-empty string found under [`TOKEN_KEYS`].
#[must_use]
pub fn extract_token(body: &Value) -> Option<String> {
    TOKEN_KEYS.iter().find_map(|key| {
        body.get(key).and_then(Value::as_str).filter(|token| !token.is_empty()).map(str::to_string)
    })
}

// ============================================================================
// SECTION: Cache
// ============================================================================

/// JSON body of the login request.
#[derive(Serialize)]
struct LoginRequest<'a> {
    /// Account username.
    username: &'a str,
    /// Account password.
    password: &'a str,
}

/// Write-once cache for the session bearer token.
///
/// # Invariants
/// - At most one login request is issued between resets.
/// - A cached token is returned as-is, whatever credentials are passed.
#[derive(Debug, Default)]
pub struct TokenCache {
    /// Cached token; the lock is held for the duration of a login.
    token: Mutex<Option<String>>,
}

impl TokenCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide cache.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<TokenCache> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// Returns the cached token without logging in.
    pub async fn cached(&self) -> Option<String> {
        self.token.lock().await.clone()
    }

    /// Forgets the cached token so the next call logs in again.
    pub async fn reset(&self) {
        self.token.lock().await.take();
    }

    /// Returns the session token, logging in on first use.
    ///
    /// Blank or missing overrides fall back to the configured credentials.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MissingCredentials`] when no username or password resolves.
    /// - [`AuthError::Client`] when the login request cannot be sent or decoded.
    /// - [`AuthError::LoginRejected`] when the status is not 200 or 201.
    /// - [`AuthError::TokenMissing`] when no token field is present.
    pub async fn login_and_get_token(
        &self,
        config: &HarnessConfig,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<String, AuthError> {
        let mut slot = self.token.lock().await;
        if let Some(token) = slot.as_ref() {
            debug!("reusing cached session token");
            return Ok(token.clone());
        }
        let username = resolve_credential(username, config.username.as_deref())
            .ok_or(AuthError::MissingCredentials)?;
        let password = resolve_credential(password, config.password.as_deref())
            .ok_or(AuthError::MissingCredentials)?;
        let token = login(config, username, password).await?;
        *slot = Some(token.clone());
        Ok(token)
    }
}

/// Picks the override when non-blank, else the configured value when non-blank.
fn resolve_credential<'a>(
    override_value: Option<&'a str>,
    configured: Option<&'a str>,
) -> Option<&'a str> {
    let non_blank = |value: &&str| !value.trim().is_empty();
    override_value.filter(non_blank).or_else(|| configured.filter(non_blank))
}

/// Performs one login request on a short-lived anonymous client.
async fn login(config: &HarnessConfig, username: &str, password: &str) -> Result<String, AuthError> {
    let client = ApiClient::open(config, None)?;
    info!(path = %config.login_path, "logging in for session token");
    let response = client
        .post_json(
            &config.login_path,
            &LoginRequest {
                username,
                password,
            },
        )
        .await?;
    client.close();

    if !response.status_in(&LOGIN_OK_STATUSES) {
        warn!(status = response.status().as_u16(), "login rejected");
        return Err(AuthError::LoginRejected {
            status: response.status(),
            body: response.text().to_string(),
        });
    }
    let body = response.json_value()?;
    extract_token(&body).ok_or_else(|| AuthError::TokenMissing {
        body: response.text().to_string(),
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
