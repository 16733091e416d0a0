// system-tests/src/lib.rs
// ============================================================================
// Module: Blog API System Tests Library
// Description: Scenario data builders shared by the live suites.
// Purpose: Keep blog payloads, URLs, and response-shape checks in one place.
// Dependencies: blog-e2e-harness, rand, reqwest, serde_json
// ============================================================================

//! ## Overview
//! This crate hosts the scenario-level helpers used by the live suites in
//! `system-tests/tests`: blog form payloads, detail/comment/like URLs, and the
//! loose response-shape checks the blog API needs (paginated or bare lists,
//! numeric or string ids).

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod blog;
pub mod config;
