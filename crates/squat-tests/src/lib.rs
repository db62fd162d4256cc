//! Squat Model Test Infrastructure
//!
//! Shared fixtures and assertions for the integration suites:
//!
//! - `scenarios`: named poses with known balance zones
//! - `proptest_model`: chain invariants over the nominal input space
//! - `cli_library`: command builders driven through the CLI library
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p squat-tests
//! ```

pub mod fixtures;

use squat_model::Point2;

/// Relative tolerance used across the suites.
pub const REL_TOL: f64 = 1e-9;

/// True if `actual` is within [`REL_TOL`] of `expected` (absolute near zero).
pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= REL_TOL * expected.abs().max(1.0)
}

/// Asserts two points agree to [`REL_TOL`].
#[track_caller]
pub fn assert_point_eq(actual: Point2, expected: Point2) {
    assert!(
        approx_eq(actual.x, expected.x) && approx_eq(actual.y, expected.y),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}
