//! Assertion helpers for tests.

use std::fmt::Debug;

use super::Outcome;

/// Panics unless `outcome` is a success.
///
/// # Panics
///
/// Panics with the failure value in the message if `outcome` is a failure.
///
/// # Examples
///
/// ```rust
/// use outcome::outcome::{Outcome, assert_ok};
///
/// let outcome: Outcome<i32, String> = Outcome::success(1);
/// assert_ok(&outcome);
/// ```
#[track_caller]
pub fn assert_ok<T, E: Debug>(outcome: &Outcome<T, E>) {
    if let Outcome::Failure(error) = outcome {
        tracing::debug!(error = ?error, "assert_ok failed");
        panic!("expected a success outcome, got failure: {error:?}");
    }
}

/// Panics unless `outcome` is a failure.
///
/// # Panics
///
/// Panics with the success value in the message if `outcome` is a success.
#[track_caller]
pub fn assert_error<T: Debug, E>(outcome: &Outcome<T, E>) {
    if let Outcome::Success(value) = outcome {
        tracing::debug!(value = ?value, "assert_error failed");
        panic!("expected a failure outcome, got success: {value:?}");
    }
}
