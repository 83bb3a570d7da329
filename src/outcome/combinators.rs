//! Transformation and recovery combinators for [`Outcome`].
//!
//! Each synchronous combinator has an `_async` sibling that accepts a
//! callback returning a `Future` and promotes the chain to an
//! [`AsyncOutcome`]. Promotion is explicit: once a chain is async it stays
//! async until it is awaited.
//!
//! | on success        | on failure            | catches panics             |
//! |-------------------|-----------------------|----------------------------|
//! | `map`             | `recover`             | `map_catching`, `recover_catching` |
//! | `and_then`        | `recover_with`        | `and_then_catching`, `recover_with_catching` |
//! | `map_async`       | `recover_async`       | `map_async_catching`, `recover_async_catching` |

use std::convert::Infallible;

use super::Outcome;
use crate::capture::{CaughtPanic, catch_sync};

#[cfg(feature = "async")]
use crate::async_outcome::{AsyncOutcome, Replayable};
#[cfg(feature = "async")]
use std::future::Future;

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the success value. A failure passes through untouched and
    /// `transform` is never called.
    ///
    /// Panics raised by `transform` unwind to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let ok: Outcome<i32, String> = Outcome::success(2);
    /// assert_eq!(ok.map(|x| x * 3), Outcome::success(6));
    /// ```
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a step that itself returns an outcome, adopting that outcome
    /// as-is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// fn half(value: i32) -> Outcome<i32, String> {
    ///     if value % 2 == 0 {
    ///         Outcome::success(value / 2)
    ///     } else {
    ///         Outcome::failure(format!("{value} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).flat_map(half).flat_map(half), Outcome::success(2));
    /// assert_eq!(
    ///     Outcome::success(6).flat_map(half).flat_map(half),
    ///     Outcome::failure("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => transform(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias for [`Outcome::flat_map`].
    #[inline]
    pub fn and_then<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.flat_map(transform)
    }

    /// Like [`Outcome::map`], but a panic in `transform` becomes a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let ok: Outcome<i32, String> = Outcome::success(0);
    /// let divided = ok.map_catching(|x| 10 / x);
    /// assert_eq!(divided.error().as_deref(), Some("attempt to divide by zero"));
    /// ```
    pub fn map_catching<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
        E: From<CaughtPanic>,
    {
        self.and_then_catching(|value| Outcome::Success(transform(value)))
    }

    /// Like [`Outcome::and_then`], but a panic in `transform` becomes a
    /// failure.
    pub fn and_then_catching<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
        E: From<CaughtPanic>,
    {
        match self {
            Self::Success(value) => {
                catch_sync(|| transform(value)).unwrap_or_else(|panic| Outcome::Failure(panic.into()))
            }
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the failure value, leaving a success untouched.
    #[inline]
    pub fn map_error<E2, F>(self, transform: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(transform(error)),
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Turns a failure into a success using `on_failure`. A success passes
    /// through untouched.
    ///
    /// The result cannot fail, which the `Infallible` error type records.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let failed: Outcome<i32, String> = Outcome::failure("missing".into());
    /// assert_eq!(failed.recover(|error| error.len() as i32).into_value(), 7);
    /// ```
    #[inline]
    pub fn recover<F>(self, on_failure: F) -> Outcome<T, Infallible>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Success(on_failure(error)),
        }
    }

    /// Turns a failure into whatever outcome `on_failure` returns. The
    /// original error type disappears from the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct PrimaryDown;
    /// #[derive(Debug, PartialEq)]
    /// struct FallbackDown;
    ///
    /// let primary: Outcome<&str, PrimaryDown> = Outcome::failure(PrimaryDown);
    /// let served: Outcome<&str, FallbackDown> =
    ///     primary.recover_with(|_| Outcome::success("cached"));
    /// assert_eq!(served, Outcome::success("cached"));
    /// ```
    #[inline]
    pub fn recover_with<E2, F>(self, on_failure: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Like [`Outcome::recover`], but a panic in `on_failure` becomes a
    /// failure holding the [`CaughtPanic`].
    pub fn recover_catching<F>(self, on_failure: F) -> Outcome<T, CaughtPanic>
    where
        F: FnOnce(E) -> T,
    {
        self.recover_with_catching(|error| Outcome::Success(on_failure(error)))
    }

    /// Like [`Outcome::recover_with`], but a panic in `on_failure` becomes a
    /// failure.
    pub fn recover_with_catching<E2, F>(self, on_failure: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
        E2: From<CaughtPanic>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => {
                catch_sync(|| on_failure(error)).unwrap_or_else(|panic| Outcome::Failure(panic.into()))
            }
        }
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// Pairs two outcomes, keeping the first failure.
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        self.flat_map(|left| other.map(|right| (left, right)))
    }

    /// Collects outcomes in order into one outcome holding every value, or
    /// the first failure. Items after the first failure are not pulled from
    /// the iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let all = Outcome::all(vec![Outcome::<i32, &str>::success(1), Outcome::success(2)]);
    /// assert_eq!(all, Outcome::success(vec![1, 2]));
    /// ```
    pub fn all<I>(outcomes: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        outcomes.into_iter().collect()
    }
}

impl<T, E> FromIterator<Outcome<T, E>> for Outcome<Vec<T>, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .map(Outcome::into_result)
            .collect::<Result<Vec<T>, E>>()
            .into()
    }
}

// =============================================================================
// Promotion to AsyncOutcome
// =============================================================================

#[cfg(feature = "async")]
impl<T: Replayable, E: Replayable> Outcome<T, E> {
    /// Lifts this outcome into an already-settled [`AsyncOutcome`].
    #[inline]
    pub fn to_async(self) -> AsyncOutcome<T, E> {
        AsyncOutcome::settled(self)
    }

    /// Transforms the success value with an async function.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcome::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(1);
    /// let doubled = outcome.map_async(|x| async move { x * 2 }).await;
    /// assert_eq!(doubled, Outcome::success(2));
    /// ```
    pub fn map_async<U, F, Fut>(self, transform: F) -> AsyncOutcome<U, E>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Replayable,
    {
        self.to_async().map_async(transform)
    }

    /// Chains an async step that returns an outcome (or an [`AsyncOutcome`]).
    pub fn and_then_async<U, F, Fut>(self, transform: F) -> AsyncOutcome<U, E>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<U, E>> + Send + 'static,
        U: Replayable,
    {
        self.to_async().and_then_async(transform)
    }

    /// Like [`Outcome::map_async`], catching panics from `transform` and from
    /// the future it returns.
    pub fn map_async_catching<U, F, Fut>(self, transform: F) -> AsyncOutcome<U, E>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Replayable,
        E: From<CaughtPanic>,
    {
        self.to_async().map_async_catching(transform)
    }

    /// Like [`Outcome::and_then_async`], catching panics.
    pub fn and_then_async_catching<U, F, Fut>(self, transform: F) -> AsyncOutcome<U, E>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<U, E>> + Send + 'static,
        U: Replayable,
        E: From<CaughtPanic>,
    {
        self.to_async().and_then_async_catching(transform)
    }

    /// Recovers from a failure with an async function.
    pub fn recover_async<F, Fut>(self, on_failure: F) -> AsyncOutcome<T, Infallible>
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        self.to_async().recover_async(on_failure)
    }

    /// Recovers from a failure with an async step that returns an outcome.
    pub fn recover_with_async<E2, F, Fut>(self, on_failure: F) -> AsyncOutcome<T, E2>
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<T, E2>> + Send + 'static,
        E2: Replayable,
    {
        self.to_async().recover_with_async(on_failure)
    }

    /// Like [`Outcome::recover_async`], catching panics.
    pub fn recover_async_catching<F, Fut>(self, on_failure: F) -> AsyncOutcome<T, CaughtPanic>
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        self.to_async().recover_async_catching(on_failure)
    }

    /// Like [`Outcome::recover_with_async`], catching panics.
    pub fn recover_with_async_catching<E2, F, Fut>(self, on_failure: F) -> AsyncOutcome<T, E2>
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<T, E2>> + Send + 'static,
        E2: Replayable + From<CaughtPanic>,
    {
        self.to_async().recover_with_async_catching(on_failure)
    }

    /// Runs an async side effect on success; the result settles to this
    /// outcome once the action has finished.
    pub fn on_success_async<F, Fut>(self, action: F) -> AsyncOutcome<T, E>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.to_async().on_success_async(action)
    }

    /// Runs an async side effect on failure; the result settles to this
    /// outcome once the action has finished.
    pub fn on_failure_async<F, Fut>(self, action: F) -> AsyncOutcome<T, E>
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.to_async().on_failure_async(action)
    }
}

#[cfg(feature = "async")]
impl<T, E> Outcome<T, E> {
    /// Returns the success value, or awaits `on_failure(error)`.
    ///
    /// Recovery here always yields a plain value, so the result is a future
    /// of `T` rather than an [`AsyncOutcome`].
    pub async fn get_or_else_async<F, Fut>(self, on_failure: F) -> T
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => on_failure(error).await,
        }
    }

    /// Awaits exactly one of two async branches.
    pub async fn fold_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(E) -> FFut,
        FFut: Future<Output = R>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(error) => on_failure(error).await,
        }
    }
}
