// system-tests/src/config.rs
// ============================================================================
// Module: Scenario Configuration
// Description: Scenario-only settings layered on the harness configuration.
// Purpose: Locate the banner image uploaded by blog create/update scenarios.
// Dependencies: blog-e2e-harness
// ============================================================================

//! ## Overview
//! Endpoint paths and credentials come from
//! [`blog_e2e_harness::HarnessConfig`]. The only scenario-specific setting is
//! the banner image, which defaults to the copy checked in under
//! `system-tests/tests/resources`.

use std::path::PathBuf;

use blog_e2e_harness::ConfigError;
use blog_e2e_harness::config::read_env_strict;

/// Environment variable overriding the banner image path.
pub const BANNER_PATH_ENV: &str = "BANNER_PATH";

/// Returns the banner image path, honoring `BANNER_PATH` when set.
///
/// A blank `BANNER_PATH` reads as unset.
///
/// # Errors
///
/// Returns an error when `BANNER_PATH` is not valid UTF-8.
pub fn banner_path() -> Result<PathBuf, ConfigError> {
    Ok(read_env_strict(BANNER_PATH_ENV)?
        .filter(|value| !value.trim().is_empty())
        .map_or_else(default_banner_path, PathBuf::from))
}

/// Returns the checked-in banner image path.
#[must_use]
pub fn default_banner_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("resources").join("banner.jpg")
}
