// crates/blog-e2e-harness/src/lib.rs
// ============================================================================
// Module: Blog E2E Harness Library
// Description: Fixtures, scoped HTTP clients, and credential caching.
// Purpose: Provide the shared plumbing for blog API end-to-end tests.
// Dependencies: reqwest, dotenvy, tokio, tracing, thiserror
// ============================================================================

//! ## Overview
//! `blog-e2e-harness` hands each end-to-end test two freshly scoped HTTP
//! clients against the blog API under test: an anonymous one and one that
//! carries a bearer token. The token comes from a login that happens at most
//! once per [`TokenCache`], and every endpoint path is taken from
//! [`HarnessConfig`], which is read from the environment once per process.
//!
//! Security posture: credentials and tokens are secrets; they never appear in
//! log output.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod fixtures;
pub mod logging;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use client::ApiClient;
pub use client::ApiResponse;
pub use config::HarnessConfig;
pub use config::HarnessEnv;
pub use credentials::TokenCache;
pub use credentials::extract_token;
pub use error::AuthError;
pub use error::ClientError;
pub use error::ConfigError;
pub use error::HarnessError;
pub use fixtures::Fixtures;
