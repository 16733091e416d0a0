// crates/blog-e2e-harness/src/fixtures.rs
// ============================================================================
// Module: Test Fixtures
// Description: Per-test anonymous and authenticated API clients.
// Purpose: Hand scenarios ready-to-use clients over a shared session token.
// Dependencies: client, config, credentials, error, logging
// ============================================================================

//! ## Overview
//! A scenario asks [`Fixtures`] for the clients it needs. Each call returns a
//! brand new [`ApiClient`], so connections and headers never leak between
//! tests; only the bearer token is shared, through the [`TokenCache`]. The
//! clients are released when the test drops them, whether it passes or fails.
//!
//! ```no_run
//! # async fn scenario() -> Result<(), Box<dyn std::error::Error>> {
//! let fixtures = blog_e2e_harness::Fixtures::session()?;
//! let http = fixtures.http().await?;
//! let http_public = fixtures.http_public()?;
//! let listing = http.get(&fixtures.config().blogs_path).await?;
//! assert_eq!(listing.status().as_u16(), 200);
//! # drop(http_public);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::client::ApiClient;
use crate::config::HarnessConfig;
use crate::credentials::TokenCache;
use crate::error::AuthError;
use crate::error::ClientError;
use crate::error::ConfigError;
use crate::error::HarnessError;
use crate::logging;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Client provisioner bound to a configuration and a token cache.
#[derive(Debug, Clone, Copy)]
pub struct Fixtures<'a> {
    /// Endpoint and credential configuration.
    config: &'a HarnessConfig,
    /// Token cache shared by authenticated clients.
    cache: &'a TokenCache,
}

impl Fixtures<'static> {
    /// Returns fixtures over the process-wide configuration and token cache.
    ///
    /// Also installs the log subscriber on first use.
    ///
    /// # Errors
    ///
    /// Returns an error when the environment configuration cannot be loaded.
    pub fn session() -> Result<Self, ConfigError> {
        logging::init();
        Ok(Self::new(HarnessConfig::shared()?, TokenCache::global()))
    }
}

impl<'a> Fixtures<'a> {
    /// Builds fixtures over an explicit configuration and cache.
    #[must_use]
    pub const fn new(config: &'a HarnessConfig, cache: &'a TokenCache) -> Self {
        Self {
            config,
            cache,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &'a HarnessConfig {
        self.config
    }

    /// Returns the configured API server root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] when `BASE_URL` is unset.
    pub fn base_url(&self) -> Result<&'a str, ConfigError> {
        self.config.base_url()
    }

    /// Returns the session token, logging in on first use.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when login is impossible or fails.
    pub async fn auth_token(&self) -> Result<String, AuthError> {
        self.cache.login_and_get_token(self.config, None, None).await
    }

    /// Opens a fresh client without an `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the client cannot be built.
    pub fn http_public(&self) -> Result<ApiClient, ClientError> {
        ApiClient::open(self.config, None)
    }

    /// Opens a fresh client that carries the session bearer token.
    ///
    /// # Errors
    ///
    /// Returns a [`HarnessError`] when login fails or the client cannot be built.
    pub async fn http(&self) -> Result<ApiClient, HarnessError> {
        let token = self.auth_token().await?;
        Ok(ApiClient::open(self.config, Some(&token))?)
    }
}
