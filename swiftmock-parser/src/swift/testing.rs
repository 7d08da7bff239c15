//! Testing utilities
//!
//!     Swift sources used by tests live in `tests/fixtures/` of this crate. Tests locate
//!     them by name through [fixture_path] instead of inlining large sources, so the same verified inputs back the unit, integration and CLI tests.

use std::path::PathBuf;

/// Absolute path of a file in this crate's `tests/fixtures/` directory
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
