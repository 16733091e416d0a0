// crates/blog-e2e-harness/src/error.rs
// ============================================================================
// Module: Harness Errors
// Description: Error taxonomy for configuration, transport, and login.
// Purpose: Give every fail-fast path a typed error with a readable message.
// Dependencies: thiserror, reqwest
// ============================================================================

//! ## Overview
//! Nothing in the harness retries or recovers. Each error bubbles straight to
//! the calling test, which aborts. Messages for HTTP failures always carry
//! the status and the raw response body so a failed run can be diagnosed
//! from the test output alone.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::StatusCode;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `BASE_URL` was not set when a consumer needed it.
    #[error("BASE_URL must be set in the environment or .env")]
    MissingBaseUrl,
    /// An environment value was present but unusable.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// HTTP client construction and transport errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The underlying transport refused the client settings.
    #[error("failed to build http client: {0}")]
    Build(String),
    /// Connection, DNS, timeout, or body read failure.
    #[error("{method} {url} failed: {source}")]
    Transport {
        /// HTTP method of the failed request.
        method: String,
        /// Fully resolved request URL.
        url: String,
        /// Transport error reported by reqwest.
        #[source]
        source: reqwest::Error,
    },
    /// A multipart attachment could not be read.
    #[error("failed to read attachment {path}: {message}")]
    Attachment {
        /// Path of the attachment on disk.
        path: String,
        /// I/O error description.
        message: String,
    },
    /// Response body was not the JSON the caller asked for.
    #[error("response is not valid JSON ({status}): {message}; body: {body}")]
    Decode {
        /// Response status code.
        status: StatusCode,
        /// Decoder error description.
        message: String,
        /// Raw response body.
        body: String,
    },
}

/// Login and credential errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password was absent or blank.
    #[error("API_USERNAME/API_PASSWORD must be set in environment/.env")]
    MissingCredentials,
    /// Login request could not be sent or read.
    #[error(transparent)]
    Client(#[from] ClientError),
    /// Login endpoint answered with a status other than 200 or 201.
    #[error("Login failed: {status} {body}")]
    LoginRejected {
        /// Response status code.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },
    /// Login succeeded but no known token field was present.
    #[error("Token key not found in response: {body}")]
    TokenMissing {
        /// Raw response body.
        body: String,
    },
}

/// Umbrella error for fixture consumers.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Configuration failure.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Client failure.
    #[error(transparent)]
    Client(#[from] ClientError),
    /// Authentication failure.
    #[error(transparent)]
    Auth(#[from] AuthError),
}
