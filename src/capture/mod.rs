//! Panic-capture boundary.
//!
//! Rust's "unexpected exception" is a panic. Operators without `catching`
//! in their name let panics unwind to the caller untouched; the functions in
//! this module (and every `*_catching` operator) intercept them and turn them
//! into failure values instead.
//!
//! - [`attempt`] / [`attempt_with`]: run a closure now, capture its panic.
//! - [`wrap`] / [`wrap_with`]: turn a closure into one that returns an
//!   [`Outcome`] instead of panicking.
//! - [`attempt_async`], [`attempt_async_with`], [`wrap_async`]: the same for
//!   closures that return futures (feature `async`).
//!
//! # Examples
//!
//! ```rust
//! use outcome::capture::{CaughtPanic, attempt, wrap};
//!
//! let parsed = attempt(|| "42".parse::<i32>().unwrap());
//! assert_eq!(parsed.value(), Some(42));
//!
//! let checked_div = wrap(|(left, right): (i32, i32)| left / right);
//! assert!(checked_div((10, 2)).is_ok());
//! assert!(checked_div((10, 0)).is_error());
//! ```

mod error;

pub use error::{CaughtPanic, UnwrappedFailure};

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::outcome::Outcome;

#[cfg(feature = "async")]
use crate::async_outcome::{AsyncOutcome, Replayable};
#[cfg(feature = "async")]
use std::future::Future;

/// Runs `function`, converting a panic into `Err(CaughtPanic)`.
#[inline]
pub(crate) fn catch_sync<R>(function: impl FnOnce() -> R) -> Result<R, CaughtPanic> {
    catch_unwind(AssertUnwindSafe(function)).map_err(CaughtPanic::from_payload)
}

/// Drives `future` to completion, converting a panic during any poll into
/// `Err(CaughtPanic)`.
#[cfg(feature = "async")]
pub(crate) async fn catch_future<Fut>(future: Fut) -> Result<Fut::Output, CaughtPanic>
where
    Fut: Future,
{
    use futures::FutureExt;

    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(CaughtPanic::from_payload)
}

/// Calls `function`, then drives the future it returns, converting a panic
/// from either stage into `Err(CaughtPanic)`.
#[cfg(feature = "async")]
pub(crate) async fn catch_call<F, Fut>(function: F) -> Result<Fut::Output, CaughtPanic>
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    let future = catch_sync(function)?;
    catch_future(future).await
}

/// Calls `function` immediately and captures a panic into a failure.
///
/// # Examples
///
/// ```rust
/// use outcome::capture::attempt;
///
/// assert_eq!(attempt(|| 21 * 2).value(), Some(42));
///
/// let failed = attempt(|| -> i32 { panic!("division by zero") });
/// assert_eq!(failed.error().unwrap().message(), "division by zero");
/// ```
pub fn attempt<T, F>(function: F) -> Outcome<T, CaughtPanic>
where
    F: FnOnce() -> T,
{
    catch_sync(function).into()
}

/// Like [`attempt`], but passes a captured panic through `transform` before
/// storing it in the failure.
///
/// # Examples
///
/// ```rust
/// use outcome::capture::attempt_with;
///
/// #[derive(Debug, PartialEq)]
/// enum ParseError {
///     Invalid(String),
/// }
///
/// let outcome = attempt_with(
///     || "abc".parse::<i32>().expect("not a number"),
///     |panic| ParseError::Invalid(panic.into_message()),
/// );
/// assert!(matches!(outcome.error(), Some(ParseError::Invalid(_))));
/// ```
pub fn attempt_with<T, E, F, G>(function: F, transform: G) -> Outcome<T, E>
where
    F: FnOnce() -> T,
    G: FnOnce(CaughtPanic) -> E,
{
    match catch_sync(function) {
        Ok(value) => Outcome::Success(value),
        Err(panic) => Outcome::Failure(transform(panic)),
    }
}

/// Wraps `function` so that each call returns an [`Outcome`] instead of
/// panicking.
///
/// Multiple parameters are passed as a tuple.
///
/// # Examples
///
/// ```rust
/// use outcome::capture::wrap;
///
/// let index = wrap(|position: usize| [1, 2, 3][position]);
/// assert_eq!(index(1).value(), Some(2));
/// assert!(index(7).is_error());
/// ```
pub fn wrap<A, T, F>(function: F) -> impl Fn(A) -> Outcome<T, CaughtPanic>
where
    F: Fn(A) -> T,
{
    move |argument| attempt(|| function(argument))
}

/// Like [`wrap`], with a transform applied to captured panics.
pub fn wrap_with<A, T, E, F, G>(function: F, transform: G) -> impl Fn(A) -> Outcome<T, E>
where
    F: Fn(A) -> T,
    G: Fn(CaughtPanic) -> E,
{
    move |argument| attempt_with(|| function(argument), &transform)
}

/// Calls `function` immediately and captures panics raised either by the
/// call itself or while the returned future runs.
///
/// # Examples
///
/// ```rust,ignore
/// use outcome::capture::attempt_async;
///
/// let outcome = attempt_async(|| async { 42 }).await;
/// assert_eq!(outcome.value(), Some(42));
/// ```
#[cfg(feature = "async")]
pub fn attempt_async<T, F, Fut>(function: F) -> AsyncOutcome<T, CaughtPanic>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T> + Send + 'static,
    T: Replayable,
{
    attempt_async_with(function, std::convert::identity)
}

/// Like [`attempt_async`], with a transform applied to captured panics.
#[cfg(feature = "async")]
pub fn attempt_async_with<T, E, F, Fut, G>(function: F, transform: G) -> AsyncOutcome<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T> + Send + 'static,
    G: FnOnce(CaughtPanic) -> E + Send + 'static,
    T: Replayable,
    E: Replayable,
{
    match catch_sync(function) {
        Ok(future) => AsyncOutcome::from_future(async move {
            match catch_future(future).await {
                Ok(value) => Outcome::Success(value),
                Err(panic) => Outcome::Failure(transform(panic)),
            }
        }),
        Err(panic) => AsyncOutcome::failure(transform(panic)),
    }
}

/// Wraps an async `function` so that each call returns an [`AsyncOutcome`]
/// that settles to a failure instead of panicking.
#[cfg(feature = "async")]
pub fn wrap_async<A, T, F, Fut>(function: F) -> impl Fn(A) -> AsyncOutcome<T, CaughtPanic>
where
    F: Fn(A) -> Fut,
    Fut: Future<Output = T> + Send + 'static,
    T: Replayable,
{
    move |argument| attempt_async(|| function(argument))
}
