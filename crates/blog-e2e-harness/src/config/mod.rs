// crates/blog-e2e-harness/src/config/mod.rs
// ============================================================================
// Module: Harness Configuration
// Description: Centralized configuration for blog API end-to-end tests.
// Purpose: Provide typed access to the target server, paths, and credentials.
// Dependencies: dotenvy
// ============================================================================

//! ## Overview
//! Harness configuration is read from environment variables (after an
//! optional `.env` file) and mapped into a small typed record that is shared
//! by every fixture in the test process.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::HarnessConfig;
pub use env::HarnessEnv;
pub use env::load_dotenv_from;
pub use env::read_env_strict;
