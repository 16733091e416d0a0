// system-tests/src/blog.rs
// ============================================================================
// Module: Blog Scenario Data
// Description: Blog payload builders, resource URLs, and shape checks.
// Purpose: Share the blog-specific knowledge used by every live suite.
// Dependencies: blog-e2e-harness, rand, reqwest, serde_json
// ============================================================================

//! ## Overview
//! Blog create and update requests are multipart forms with a JPEG banner and
//! repeated `tags` fields. Resource URLs are derived from the configured
//! collection paths, so suites never hardcode an API prefix.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use blog_e2e_harness::ClientError;
use blog_e2e_harness::client::file_part;
use blog_e2e_harness::credentials::TOKEN_KEYS;
use rand::Rng;
use reqwest::multipart::Form;
use serde_json::Value;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Media type of the banner upload.
pub const BANNER_MIME: &str = "image/jpeg";
/// Relative path of the like action under a blog detail URL.
pub const LIKE_SEGMENT: &str = "like/";
/// Relative path of the fallback unlike action under a blog detail URL.
pub const UNLIKE_SEGMENT: &str = "unlike/";
/// Fragments accepted in the body of a 401/403 response.
pub const AUTH_FAILURE_MARKERS: [&str; 3] = ["unauthorized", "forbidden", "credentials"];

// ============================================================================
// SECTION: Payloads
// ============================================================================

/// Form fields of a blog create or update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogForm {
    /// Blog title.
    pub title: String,
    /// Category id.
    pub category: String,
    /// Body text.
    pub description: String,
    /// Published flag.
    pub is_active: bool,
    /// Literary-magazine flag.
    pub tap_chi_van_hoc: bool,
    /// Tag ids.
    pub tags: Vec<String>,
}

impl BlogForm {
    /// Builds an active blog in category 5 tagged 24 and 25.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: "5".to_string(),
            description: description.into(),
            is_active: true,
            tap_chi_van_hoc: true,
            tags: vec!["24".to_string(), "25".to_string()],
        }
    }

    /// Returns the text fields in wire order; `tags` repeats once per tag.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("category", self.category.clone()),
            ("description", self.description.clone()),
            ("is_active", self.is_active.to_string()),
            ("tap_chi_van_hoc", self.tap_chi_van_hoc.to_string()),
        ];
        fields.extend(self.tags.iter().map(|tag| ("tags", tag.clone())));
        fields
    }

    /// Builds the multipart body with the banner attached as `banner`.
    ///
    /// # Errors
    ///
    /// Returns an error when the banner file cannot be read.
    pub async fn into_multipart(
        self,
        banner: &Path,
        banner_name: &str,
    ) -> Result<Form, ClientError> {
        let part = file_part(banner, banner_name, BANNER_MIME).await?;
        let form = self
            .fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));
        Ok(form.part("banner", part))
    }
}

/// Returns six random lowercase hex characters for unique titles and users.
#[must_use]
pub fn unique_suffix() -> String {
    format!("{:06x}", rand::thread_rng().gen_range(0..0x0100_0000_u32))
}

// ============================================================================
// SECTION: URLs
// ============================================================================

/// Returns the detail path of one blog under the collection path.
#[must_use]
pub fn detail_url(blogs_path: &str, blog_id: &str) -> String {
    format!("{}/{blog_id}/", blogs_path.trim_end_matches('/'))
}

/// Returns a nested resource path under a blog detail path.
#[must_use]
pub fn nested_path(detail: &str, segment: &str) -> String {
    format!("{}/{}", detail.trim_end_matches('/'), segment.trim_start_matches('/'))
}

// ============================================================================
// SECTION: Response Shapes
// ============================================================================

/// Renders an id that may be a JSON number or a non-empty string.
#[must_use]
pub fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

/// Renders a scalar for loose comparisons (`15` and `"15"` compare equal).
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Returns the items of a paginated (`{"results": [...]}`) or bare list.
#[must_use]
pub fn items_from_listing(body: &Value) -> Option<&Vec<Value>> {
    match body {
        Value::Array(items) => Some(items),
        Value::Object(map) => map.get("results").and_then(Value::as_array),
        _ => None,
    }
}

/// Returns true when a login body names any known token field.
#[must_use]
pub fn has_token_key(body: &Value) -> bool {
    TOKEN_KEYS.iter().any(|key| body.get(key).is_some())
}

/// Returns true when an error body explains an auth rejection.
#[must_use]
pub fn mentions_auth_failure(body: &str) -> bool {
    let lowered = body.to_lowercase();
    AUTH_FAILURE_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Returns true when `value` is a non-empty string.
#[must_use]
pub fn is_non_empty_string(value: Option<&Value>) -> bool {
    value.and_then(Value::as_str).is_some_and(|text| !text.is_empty())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
