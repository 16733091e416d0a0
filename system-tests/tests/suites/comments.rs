// system-tests/tests/suites/comments.rs
// ============================================================================
// Module: Comment Tests
// Description: Add a comment to a fresh blog and find it in the listing.
// Purpose: Ensure comments are persisted under their blog.
// Dependencies: system-tests helpers
// ============================================================================

//! Comment tests for the blog API.

use helpers::TestResult;
use helpers::blogs::cleanup_blog;
use helpers::blogs::create_blog;
use helpers::checks::expect_field;
use helpers::checks::expect_status;
use serde_json::json;
use system_tests::blog::BlogForm;
use system_tests::blog::id_text;
use system_tests::blog::items_from_listing;
use system_tests::blog::nested_path;
use system_tests::blog::unique_suffix;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn add_and_list_comment() -> TestResult {
    let fixtures = helpers::session()?;
    let config = fixtures.config();
    let http = fixtures.http().await?;
    let form = BlogForm::new(
        format!("Blog for comment {}", unique_suffix()),
        "This blog is created for comment testing",
    );
    let blog = create_blog(&http, config, form).await?;
    let comments_url = nested_path(&blog.detail, &config.comments_path);
    let text = format!("Comment content {}", &unique_suffix()[..4]);

    let created = http.post_json(&comments_url, &json!({"text": text})).await?;
    expect_status(&created, &[200, 201], "Add comment")?;
    let comment = created.json_value()?;
    let comment_id = comment
        .get("id")
        .and_then(id_text)
        .ok_or_else(|| format!("Comment response missing id: {comment}"))?;
    expect_field(&comment, "text", &text)?;

    let listed = http.get(&comments_url).await?;
    expect_status(&listed, &[200], "List comments")?;
    let listing = listed.json_value()?;
    let comments = items_from_listing(&listing)
        .ok_or_else(|| format!("Unexpected response format: {listing}"))?;
    let found = comments
        .iter()
        .any(|item| item.get("id").and_then(id_text).as_deref() == Some(comment_id.as_str()));

    cleanup_blog(&http, &blog).await;
    if !found {
        return Err(format!("New comment {comment_id} not found in list").into());
    }
    Ok(())
}
