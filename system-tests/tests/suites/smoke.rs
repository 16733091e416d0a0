// system-tests/tests/suites/smoke.rs
// ============================================================================
// Module: Smoke Tests
// Description: Minimal reachability checks against the deployed blog API.
// Purpose: Fail fast when login, listing, or the schema endpoint is down.
// Dependencies: system-tests helpers
// ============================================================================

//! Smoke tests for the blog API.

use blog_e2e_harness::AuthError;
use helpers::TestResult;
use helpers::checks::expect_status;
use serde_json::json;
use system_tests::blog::has_token_key;
use system_tests::blog::items_from_listing;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn login_returns_token() -> TestResult {
    let fixtures = helpers::session()?;
    let config = fixtures.config();
    let username = config.username.as_deref().ok_or(AuthError::MissingCredentials)?;
    let password = config.password.as_deref().ok_or(AuthError::MissingCredentials)?;

    let http = fixtures.http_public()?;
    let response = http
        .post_json(&config.login_path, &json!({"username": username, "password": password}))
        .await?;
    expect_status(&response, &[200, 201], "Login")?;

    let body = response.json_value()?;
    if !has_token_key(&body) {
        return Err(format!("Token missing in response: {body}").into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn blog_list_is_paginated_or_bare() -> TestResult {
    let fixtures = helpers::session()?;
    let http = fixtures.http().await?;
    let response = http
        .get_with_query(&fixtures.config().blogs_path, &[("page", "1"), ("page_size", "10")])
        .await?;
    if response.status().as_u16() != 200 {
        return Err(format!("List blogs failed: {}", response.describe()).into());
    }

    let body = response.json_value()?;
    if items_from_listing(&body).is_none() {
        return Err(format!("Unexpected listing shape: {body}").into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn schema_endpoint_is_served_when_configured() -> TestResult {
    let fixtures = helpers::session()?;
    let Some(schema_url) = fixtures.config().api_schema_url.as_deref() else {
        tracing::info!("API_SCHEMA_URL unset; skipping schema check");
        return Ok(());
    };

    let http = fixtures.http_public()?;
    let response = http.get(schema_url).await?;
    expect_status(&response, &[200], "Schema fetch")
}
