// crates/blog-e2e-harness/src/config/env.rs
// ============================================================================
// Module: Harness Environment
// Description: Environment-backed configuration for the blog API harness.
// Purpose: Centralize env parsing with strict UTF-8 validation and defaults.
// Dependencies: dotenvy
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement. A variable
//! that is set but blank counts as unset, so `API_SCHEMA_URL=` in a `.env`
//! template means "no schema endpoint" and `LOGIN_PATH=` means the default
//! path. `BASE_URL` has no default; its absence is reported the first time a
//! consumer asks for it, not at load time. Blank credentials surface as
//! `AuthError::MissingCredentials` when a login is attempted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::ConfigError;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for harness configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessEnv {
    /// API server root (required on first use).
    BaseUrl,
    /// Optional schema endpoint URL.
    ApiSchemaUrl,
    /// Login endpoint path.
    LoginPath,
    /// Registration endpoint path.
    RegisterPath,
    /// Blog collection endpoint path.
    BlogsPath,
    /// Comments endpoint path.
    CommentsPath,
    /// Likes endpoint path.
    LikesPath,
    /// Shares endpoint path.
    SharesPath,
    /// Login username.
    Username,
    /// Login password.
    Password,
}

impl HarnessEnv {
    /// Every key read by [`HarnessConfig::load`].
    pub const ALL: [Self; 10] = [
        Self::BaseUrl,
        Self::ApiSchemaUrl,
        Self::LoginPath,
        Self::RegisterPath,
        Self::BlogsPath,
        Self::CommentsPath,
        Self::LikesPath,
        Self::SharesPath,
        Self::Username,
        Self::Password,
    ];

    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "BASE_URL",
            Self::ApiSchemaUrl => "API_SCHEMA_URL",
            Self::LoginPath => "LOGIN_PATH",
            Self::RegisterPath => "REGISTER_PATH",
            Self::BlogsPath => "BLOGS_PATH",
            Self::CommentsPath => "COMMENTS_PATH",
            Self::LikesPath => "LIKES_PATH",
            Self::SharesPath => "SHARES_PATH",
            Self::Username => "API_USERNAME",
            Self::Password => "API_PASSWORD",
        }
    }

    /// Returns the fallback used when the variable is unset, if any.
    #[must_use]
    pub const fn default_value(self) -> Option<&'static str> {
        match self {
            Self::LoginPath => Some("/auth/login/"),
            Self::RegisterPath => Some("/auth/register/"),
            Self::BlogsPath => Some("/blog/"),
            Self::CommentsPath => Some("/comments/"),
            Self::LikesPath => Some("/likes/"),
            Self::SharesPath => Some("/shares/"),
            Self::BaseUrl | Self::ApiSchemaUrl | Self::Username | Self::Password => None,
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed harness configuration derived from environment variables.
///
/// # Invariants
/// - Built once per process by [`HarnessConfig::shared`] and never mutated.
/// - Path fields always hold a value, either from the environment or the
///   documented default.
#[derive(Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// API server root. `None` until configured; see [`HarnessConfig::base_url`].
    pub base_url: Option<String>,
    /// Optional schema endpoint URL.
    pub api_schema_url: Option<String>,
    /// Login endpoint path.
    pub login_path: String,
    /// Registration endpoint path.
    pub register_path: String,
    /// Blog collection endpoint path.
    pub blogs_path: String,
    /// Comments endpoint path.
    pub comments_path: String,
    /// Likes endpoint path.
    pub likes_path: String,
    /// Shares endpoint path.
    pub shares_path: String,
    /// Login username.
    pub username: Option<String>,
    /// Login password.
    pub password: Option<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_schema_url: None,
            login_path: default_path(HarnessEnv::LoginPath),
            register_path: default_path(HarnessEnv::RegisterPath),
            blogs_path: default_path(HarnessEnv::BlogsPath),
            comments_path: default_path(HarnessEnv::CommentsPath),
            likes_path: default_path(HarnessEnv::LikesPath),
            shares_path: default_path(HarnessEnv::SharesPath),
            username: None,
            password: None,
        }
    }
}

impl fmt::Debug for HarnessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HarnessConfig")
            .field("base_url", &self.base_url)
            .field("api_schema_url", &self.api_schema_url)
            .field("login_path", &self.login_path)
            .field("register_path", &self.register_path)
            .field("blogs_path", &self.blogs_path)
            .field("comments_path", &self.comments_path)
            .field("likes_path", &self.likes_path)
            .field("shares_path", &self.shares_path)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl HarnessConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: read_env_nonempty(HarnessEnv::BaseUrl)?,
            api_schema_url: read_env_nonempty(HarnessEnv::ApiSchemaUrl)?,
            login_path: read_path(HarnessEnv::LoginPath)?,
            register_path: read_path(HarnessEnv::RegisterPath)?,
            blogs_path: read_path(HarnessEnv::BlogsPath)?,
            comments_path: read_path(HarnessEnv::CommentsPath)?,
            likes_path: read_path(HarnessEnv::LikesPath)?,
            shares_path: read_path(HarnessEnv::SharesPath)?,
            username: read_env_nonempty(HarnessEnv::Username)?,
            password: read_env_nonempty(HarnessEnv::Password)?,
        })
    }

    /// Returns the process-wide configuration, loading it on first access.
    ///
    /// The first call loads `.env` from the working directory (or a parent)
    /// when one exists, then reads the environment. The outcome, success or
    /// failure, is kept for the rest of the process.
    ///
    /// # Errors
    ///
    /// Returns an error when `.env` exists but cannot be parsed, or when
    /// [`HarnessConfig::load`] fails.
    pub fn shared() -> Result<&'static Self, ConfigError> {
        static SHARED: OnceLock<Result<HarnessConfig, ConfigError>> = OnceLock::new();
        SHARED
            .get_or_init(|| {
                dotenv_outcome(dotenvy::dotenv().map(drop))?;
                Self::load()
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Returns the API server root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] when `BASE_URL` was never set.
    pub fn base_url(&self) -> Result<&str, ConfigError> {
        self.base_url.as_deref().ok_or(ConfigError::MissingBaseUrl)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, ConfigError> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("{name} must be valid UTF-8")))
    })
}

/// Reads a harness variable; blank values read as unset.
fn read_env_nonempty(key: HarnessEnv) -> Result<Option<String>, ConfigError> {
    Ok(read_env_strict(key.as_str())?.filter(|value| !value.trim().is_empty()))
}

/// Reads an endpoint path, falling back to its documented default.
fn read_path(key: HarnessEnv) -> Result<String, ConfigError> {
    Ok(read_env_nonempty(key)?.unwrap_or_else(|| default_path(key)))
}

/// Returns the documented default path for `key`.
fn default_path(key: HarnessEnv) -> String {
    key.default_value().unwrap_or("/").to_string()
}

/// Loads a dotenv file into the process environment.
///
/// Variables already present in the environment are left untouched. Returns
/// `Ok(false)` when the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the file exists but cannot be read or
/// parsed.
pub fn load_dotenv_from(path: &Path) -> Result<bool, ConfigError> {
    dotenv_outcome(dotenvy::from_path(path))
}

/// Maps a dotenvy result; a missing file is not an error.
fn dotenv_outcome(result: Result<(), dotenvy::Error>) -> Result<bool, ConfigError> {
    match result {
        Ok(()) => Ok(true),
        Err(err) if err.not_found() => Ok(false),
        Err(err) => Err(ConfigError::Invalid(format!("failed to load .env: {err}"))),
    }
}
