//! Shared test fixtures for gradeplan crates.
//!
//! This crate provides request builders and float helpers for testing.
//! It depends only on `gradeplan-core`.
//!
//! - [`scenario`] - Named planning requests with known outcomes
//! - [`grid`] - Brute-force reference search for small requests
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! gradeplan-test = { workspace = true }
//! ```

pub mod grid;
pub mod scenario;

pub use grid::{grid_min_effort, GridSearch};
pub use scenario::{
    completed_only, inverted_range, semester_plan, semester_plan_with_target, three_way_plan,
    unreachable_plan,
};

/// Default float tolerance for assertions.
pub const EPS: f64 = 1e-6;

/// Returns true when `a` and `b` differ by at most `tol`.
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Asserts two floats are within [`EPS`].
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        approx_eq(actual, expected, EPS),
        "expected {expected}, got {actual}"
    );
}
