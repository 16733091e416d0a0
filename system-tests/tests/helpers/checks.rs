// system-tests/tests/helpers/checks.rs
// ============================================================================
// Module: Response Checks
// Description: Status and field assertions that report the response body.
// Purpose: Turn unexpected responses into descriptive test errors.
// Dependencies: blog-e2e-harness, serde_json
// ============================================================================

use blog_e2e_harness::ApiResponse;
use serde_json::Value;
use system_tests::blog::scalar_text;

/// Fails with `"<action> failed: <code> - <body>"` unless the status is listed.
pub fn expect_status(
    response: &ApiResponse,
    codes: &[u16],
    action: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if response.status_in(codes) {
        return Ok(());
    }
    Err(format!("{action} failed: {}", response.describe()).into())
}

/// Fails unless `body[field]` renders to `expected`.
pub fn expect_field(
    body: &Value,
    field: &str,
    expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual = body.get(field).and_then(scalar_text);
    if actual.as_deref() == Some(expected) {
        return Ok(());
    }
    Err(format!("expected {field} = {expected}, got {}", body.get(field).unwrap_or(&Value::Null))
        .into())
}

/// Returns the length of `body[field]` when it is an array.
pub fn array_len(body: &Value, field: &str) -> usize {
    body.get(field).and_then(Value::as_array).map_or(0, Vec::len)
}
