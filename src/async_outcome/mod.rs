//! `AsyncOutcome` - an outcome whose computation may not have settled yet.
//!
//! An [`AsyncOutcome<T, E>`] wraps exactly one pending computation that
//! settles to an [`Outcome<T, E>`]. It mirrors the operator set of
//! `Outcome`, but every operator returns either a new `AsyncOutcome` or a
//! plain future, because the upstream computation may still be running.
//! The only way to get at the final value is to await it (or to call
//! [`AsyncOutcome::wait_blocking`] from synchronous code).
//!
//! # Settlement and Replay
//!
//! The settlement is memoized: the underlying computation runs at most once,
//! and every clone of an `AsyncOutcome` observes the same cached outcome.
//! This is why carried values must be [`Replayable`].
//!
//! A panic while settling is cached too. Every observer, not only the first
//! one to poll, has the same panic re-raised with the original message as a
//! `String` payload.
//!
//! ```rust,ignore
//! use outcome::async_outcome::AsyncOutcome;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let runs = Arc::new(AtomicUsize::new(0));
//! let counter = runs.clone();
//! let pending: AsyncOutcome<i32, String> = AsyncOutcome::from_value_future(async move {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     42
//! });
//!
//! let first = pending.clone().map(|x| x + 1);
//! let second = pending.map(|x| x * 2);
//! assert_eq!(first.await.value(), Some(43));
//! assert_eq!(second.await.value(), Some(84));
//! assert_eq!(runs.load(Ordering::SeqCst), 1);
//! ```
//!
//! # Laziness and Ordering
//!
//! Like every Rust future, an `AsyncOutcome` does nothing until it is
//! polled. Chained operators run strictly in the order they were attached;
//! each step waits for its upstream to settle before its callback runs, and
//! short-circuits exactly as the synchronous operators do.

mod aggregate;
pub mod runtime;

pub use aggregate::{ChainItem, all, all_catching};

use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use pin_project_lite::pin_project;

use crate::capture::{CaughtPanic, catch_call, catch_future};
use crate::outcome::Outcome;

/// Values that can be carried through a memoized settlement.
///
/// Every observer of an [`AsyncOutcome`] receives its own clone of the
/// settled outcome, and the settlement may be shared across threads.
pub trait Replayable: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Replayable for T {}

pin_project! {
    /// A pending computation that settles to an [`Outcome<T, E>`].
    ///
    /// `AsyncOutcome` implements `Future` and can be awaited directly. Cloning
    /// it attaches another observer to the same settlement.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcome::async_outcome::AsyncOutcome;
    /// use outcome::outcome::Outcome;
    ///
    /// let outcome = AsyncOutcome::<i32, String>::success(1)
    ///     .map(|x| x + 1)
    ///     .and_then_async(|x| async move { Outcome::success(x * 10) })
    ///     .await;
    /// assert_eq!(outcome, Outcome::success(20));
    /// ```
    #[must_use = "an AsyncOutcome does nothing unless awaited"]
    pub struct AsyncOutcome<T, E> {
        #[pin]
        settlement: Shared<BoxFuture<'static, Settlement<T, E>>>,
    }
}

/// The cached result of a settlement: the outcome, or the panic raised while
/// computing it.
type Settlement<T, E> = Result<Outcome<T, E>, CaughtPanic>;

impl<T: Replayable, E: Replayable> Future for AsyncOutcome<T, E> {
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project().settlement.poll(context) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(panic)) => std::panic::resume_unwind(Box::new(panic.into_message())),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T, E> Clone for AsyncOutcome<T, E> {
    fn clone(&self) -> Self {
        Self {
            settlement: self.settlement.clone(),
        }
    }
}

static_assertions::assert_impl_all!(AsyncOutcome<(), ()>: Send, Sync, Unpin);

// =============================================================================
// Constructors
// =============================================================================

impl<T: Replayable, E: Replayable> AsyncOutcome<T, E> {
    /// Creates an `AsyncOutcome` that is already settled to `outcome`.
    pub fn settled(outcome: Outcome<T, E>) -> Self {
        Self::from_future(futures::future::ready(outcome))
    }

    /// Creates an `AsyncOutcome` settled to a success.
    pub fn success(value: T) -> Self {
        Self::settled(Outcome::Success(value))
    }

    /// Creates an `AsyncOutcome` settled to a failure.
    pub fn failure(error: E) -> Self {
        Self::settled(Outcome::Failure(error))
    }

    /// Adopts a future that resolves to an outcome.
    ///
    /// Passing another `AsyncOutcome` is allowed, since it is such a future.
    /// A panic while the future runs unwinds to every observer that awaits
    /// the result.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self {
            settlement: catch_future(future).boxed().shared(),
        }
    }

    /// Like [`AsyncOutcome::from_future`], but a panic while the future runs
    /// settles the result to a failure.
    pub fn from_future_catching<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
        E: From<CaughtPanic>,
    {
        Self::from_future(async move {
            catch_future(future)
                .await
                .unwrap_or_else(|panic| Outcome::Failure(panic.into()))
        })
    }

    /// Adopts a future that resolves to a plain value, treated as a success
    /// once it settles.
    pub fn from_value_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::from_future(future.map(Outcome::Success))
    }

    /// Like [`AsyncOutcome::from_value_future`], catching panics.
    pub fn from_value_future_catching<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
        E: From<CaughtPanic>,
    {
        Self::from_future_catching(future.map(Outcome::Success))
    }

    /// Adopts a future that resolves to a standard `Result`.
    pub fn from_result_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::from_future(future.map(Outcome::from))
    }

    /// Aggregates chain items; see [`all`].
    pub fn all<I>(items: I) -> AsyncOutcome<Vec<T>, E>
    where
        I: IntoIterator<Item = ChainItem<T, E>>,
    {
        all(items)
    }

    /// Aggregates chain items, catching panics; see [`all_catching`].
    pub fn all_catching<I>(items: I) -> AsyncOutcome<Vec<T>, E>
    where
        I: IntoIterator<Item = ChainItem<T, E>>,
        E: From<CaughtPanic>,
    {
        all_catching(items)
    }
}

impl<T: Replayable, E: Replayable> From<Outcome<T, E>> for AsyncOutcome<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        Self::settled(outcome)
    }
}

// =============================================================================
// Chaining
// =============================================================================

impl<T: Replayable, E: Replayable> AsyncOutcome<T, E> {
    /// Waits for this settlement, then hands it to `step`.
    fn then_settle<U, E2, F, Fut>(self, step: F) -> AsyncOutcome<U, E2>
    where
        U: Replayable,
        E2: Replayable,
        F: FnOnce(Outcome<T, E>) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<U, E2>> + Send + 'static,
    {
        AsyncOutcome::from_future(async move { step(self.await).await })
    }

    /// Transforms the success value once settled.
    pub fn map<U, F>(self, transform: F) -> AsyncOutcome<U, E>
    where
        U: Replayable,
        F: FnOnce(T) -> U + Send + 'static,
    {
        self.then_settle(move |outcome| async move { outcome.map(transform) })
    }

    /// Transforms the success value with an async function.
    pub fn map_async<U, F, Fut>(self, transform: F) -> AsyncOutcome<U, E>
    where
        U: Replayable,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        self.then_settle(move |outcome| async move {
            match outcome {
                Outcome::Success(value) => Outcome::Success(transform(value).await),
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }

    /// Chains a step that returns an outcome.
    pub fn and_then<U, F>(self, transform: F) -> AsyncOutcome<U, E>
    where
        U: Replayable,
        F: FnOnce(T) -> Outcome<U, E> + Send + 'static,
    {
        self.then_settle(move |outcome| async move { outcome.flat_map(transform) })
    }

    /// Alias for [`AsyncOutcome::and_then`].
    pub fn flat_map<U, F>(self, transform: F) -> AsyncOutcome<U, E>
    where
        U: Replayable,
        F: FnOnce(T) -> Outcome<U, E> + Send + 'static,
    {
        self.and_then(transform)
    }

    /// Chains an async step that returns an outcome (or another
    /// `AsyncOutcome`).
    pub fn and_then_async<U, F, Fut>(self, transform: F) -> AsyncOutcome<U, E>
    where
        U: Replayable,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<U, E>> + Send + 'static,
    {
        self.then_settle(move |outcome| async move {
            match outcome {
                Outcome::Success(value) => transform(value).await,
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }

    /// Like [`AsyncOutcome::map`], turning a panic in `transform` into a
    /// failure.
    pub fn map_catching<U, F>(self, transform: F) -> AsyncOutcome<U, E>
    where
        U: Replayable,
        F: FnOnce(T) -> U + Send + 'static,
        E: From<CaughtPanic>,
    {
        self.then_settle(move |outcome| async move { outcome.map_catching(transform) })
    }

    /// Like [`AsyncOutcome::map_async`], turning a panic in `transform` or in
    /// the future it returns into a failure.
    pub fn map_async_catching<U, F, Fut>(self, transform: F) -> AsyncOutcome<U, E>
    where
        U: Replayable,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        E: From<CaughtPanic>,
    {
        self.then_settle(move |outcome| async move {
            match outcome {
                Outcome::Success(value) => match catch_call(move || transform(value)).await {
                    Ok(mapped) => Outcome::Success(mapped),
                    Err(panic) => Outcome::Failure(panic.into()),
                },
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }

    /// Like [`AsyncOutcome::and_then`], turning a panic into a failure.
    pub fn and_then_catching<U, F>(self, transform: F) -> AsyncOutcome<U, E>
    where
        U: Replayable,
        F: FnOnce(T) -> Outcome<U, E> + Send + 'static,
        E: From<CaughtPanic>,
    {
        self.then_settle(move |outcome| async move { outcome.and_then_catching(transform) })
    }

    /// Like [`AsyncOutcome::and_then_async`], turning a panic into a failure.
    pub fn and_then_async_catching<U, F, Fut>(self, transform: F) -> AsyncOutcome<U, E>
    where
        U: Replayable,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<U, E>> + Send + 'static,
        E: From<CaughtPanic>,
    {
        self.then_settle(move |outcome| async move {
            match outcome {
                Outcome::Success(value) => catch_call(move || transform(value))
                    .await
                    .unwrap_or_else(|panic| Outcome::Failure(panic.into())),
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }

    /// Transforms the failure value once settled.
    pub fn map_error<E2, F>(self, transform: F) -> AsyncOutcome<T, E2>
    where
        E2: Replayable,
        F: FnOnce(E) -> E2 + Send + 'static,
    {
        self.then_settle(move |outcome| async move { outcome.map_error(transform) })
    }

    /// Recovers from a failure once settled.
    pub fn recover<F>(self, on_failure: F) -> AsyncOutcome<T, Infallible>
    where
        F: FnOnce(E) -> T + Send + 'static,
    {
        self.then_settle(move |outcome| async move { outcome.recover(on_failure) })
    }

    /// Recovers from a failure with an async function.
    pub fn recover_async<F, Fut>(self, on_failure: F) -> AsyncOutcome<T, Infallible>
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        self.recover_with_async(move |error| on_failure(error).map(Outcome::Success))
    }

    /// Recovers from a failure with a step that returns an outcome.
    pub fn recover_with<E2, F>(self, on_failure: F) -> AsyncOutcome<T, E2>
    where
        E2: Replayable,
        F: FnOnce(E) -> Outcome<T, E2> + Send + 'static,
    {
        self.then_settle(move |outcome| async move { outcome.recover_with(on_failure) })
    }

    /// Recovers from a failure with an async step that returns an outcome.
    pub fn recover_with_async<E2, F, Fut>(self, on_failure: F) -> AsyncOutcome<T, E2>
    where
        E2: Replayable,
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<T, E2>> + Send + 'static,
    {
        self.then_settle(move |outcome| async move {
            match outcome {
                Outcome::Success(value) => Outcome::Success(value),
                Outcome::Failure(error) => on_failure(error).await,
            }
        })
    }

    /// Like [`AsyncOutcome::recover`], turning a panic in `on_failure` into a
    /// failure.
    pub fn recover_catching<F>(self, on_failure: F) -> AsyncOutcome<T, CaughtPanic>
    where
        F: FnOnce(E) -> T + Send + 'static,
    {
        self.then_settle(move |outcome| async move { outcome.recover_catching(on_failure) })
    }

    /// Like [`AsyncOutcome::recover_async`], catching panics.
    pub fn recover_async_catching<F, Fut>(self, on_failure: F) -> AsyncOutcome<T, CaughtPanic>
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        self.recover_with_async_catching(move |error| on_failure(error).map(Outcome::Success))
    }

    /// Like [`AsyncOutcome::recover_with`], catching panics.
    pub fn recover_with_catching<E2, F>(self, on_failure: F) -> AsyncOutcome<T, E2>
    where
        E2: Replayable + From<CaughtPanic>,
        F: FnOnce(E) -> Outcome<T, E2> + Send + 'static,
    {
        self.then_settle(move |outcome| async move { outcome.recover_with_catching(on_failure) })
    }

    /// Like [`AsyncOutcome::recover_with_async`], catching panics.
    pub fn recover_with_async_catching<E2, F, Fut>(self, on_failure: F) -> AsyncOutcome<T, E2>
    where
        E2: Replayable + From<CaughtPanic>,
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<T, E2>> + Send + 'static,
    {
        self.then_settle(move |outcome| async move {
            match outcome {
                Outcome::Success(value) => Outcome::Success(value),
                Outcome::Failure(error) => catch_call(move || on_failure(error))
                    .await
                    .unwrap_or_else(|panic| Outcome::Failure(panic.into())),
            }
        })
    }

    /// Runs `action` on the success value once settled, passing the outcome
    /// through unchanged.
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        self.then_settle(move |outcome| async move { outcome.on_success(action) })
    }

    /// Runs an async side effect on success; the result settles to the
    /// original outcome after the action finishes.
    pub fn on_success_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.then_settle(move |outcome| async move {
            if let Outcome::Success(value) = &outcome {
                action(value.clone()).await;
            }
            outcome
        })
    }

    /// Runs `action` on the failure value once settled, passing the outcome
    /// through unchanged.
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&E) + Send + 'static,
    {
        self.then_settle(move |outcome| async move { outcome.on_failure(action) })
    }

    /// Runs an async side effect on failure; the result settles to the
    /// original outcome after the action finishes.
    pub fn on_failure_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.then_settle(move |outcome| async move {
            if let Outcome::Failure(error) = &outcome {
                action(error.clone()).await;
            }
            outcome
        })
    }

    /// Pairs two pending outcomes. `other` is only awaited when this one
    /// succeeds.
    pub fn zip<U: Replayable>(self, other: AsyncOutcome<U, E>) -> AsyncOutcome<(T, U), E> {
        self.and_then_async(move |left| other.map(move |right| (left, right)))
    }
}

// =============================================================================
// Settlement
// =============================================================================

impl<T: Replayable, E: Replayable> AsyncOutcome<T, E> {
    /// Waits for the settled outcome. Equivalent to `.await`.
    pub async fn wait(self) -> Outcome<T, E> {
        self.await
    }

    /// Blocks the current thread until the outcome settles.
    ///
    /// # Panics
    ///
    /// Panics when called from inside a current-thread tokio runtime; see
    /// [`runtime::run_blocking`].
    pub fn wait_blocking(self) -> Outcome<T, E> {
        runtime::run_blocking(self)
    }

    /// Returns the cached outcome if it has already settled.
    ///
    /// A settlement that panicked has no outcome and reports `None`; see
    /// [`AsyncOutcome::peek_panic`].
    pub fn peek(&self) -> Option<&Outcome<T, E>> {
        self.settlement.peek().and_then(|settlement| settlement.as_ref().ok())
    }

    /// Returns the cached panic if settling this outcome panicked.
    pub fn peek_panic(&self) -> Option<&CaughtPanic> {
        self.settlement.peek().and_then(|settlement| settlement.as_ref().err())
    }

    /// Resolves to `true` if the settlement is a success.
    pub async fn is_ok(self) -> bool {
        self.await.is_ok()
    }

    /// Resolves to `true` if the settlement is a failure.
    pub async fn is_error(self) -> bool {
        self.await.is_error()
    }

    /// Resolves to the success value, or `None`.
    pub async fn value(self) -> Option<T> {
        self.await.value()
    }

    /// Resolves to the failure value, or `None`.
    pub async fn error(self) -> Option<E> {
        self.await.error()
    }

    /// Resolves to the success value, or `fallback`.
    pub async fn get_or_default(self, fallback: T) -> T {
        self.await.get_or_default(fallback)
    }

    /// Resolves to the success value, or to `on_failure(error)`.
    pub async fn get_or_else<F>(self, on_failure: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.await.get_or_else(on_failure)
    }

    /// Resolves to the success value, or awaits `on_failure(error)`.
    pub async fn get_or_else_async<F, Fut>(self, on_failure: F) -> T
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        self.await.get_or_else_async(on_failure).await
    }

    /// Resolves to the success value, or panics with an
    /// [`UnwrappedFailure`](crate::capture::UnwrappedFailure) payload.
    ///
    /// Unlike [`Outcome::get_or_throw`], the reported panic location is inside
    /// this crate, not at the caller, because `#[track_caller]` does not
    /// carry across an `async fn`.
    ///
    /// # Panics
    ///
    /// Panics if the settlement is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::async_outcome::AsyncOutcome;
    /// use outcome::capture::attempt_async;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let ok: AsyncOutcome<i32, String> = AsyncOutcome::success(3);
    /// assert_eq!(ok.get_or_throw().await, 3);
    ///
    /// let failed: AsyncOutcome<i32, String> = AsyncOutcome::failure("gone".to_string());
    /// let rethrown = attempt_async(move || failed.get_or_throw()).await;
    /// assert_eq!(rethrown.error().map(|panic| panic.into_message()), Some("gone".to_string()));
    /// # });
    /// ```
    pub async fn get_or_throw(self) -> T
    where
        E: fmt::Debug,
    {
        self.await.get_or_throw()
    }

    /// Resolves to the result of exactly one of two functions.
    pub async fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        self.await.fold(on_success, on_failure)
    }

    /// Resolves to the result of exactly one of two async functions.
    pub async fn fold_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(E) -> FFut,
        FFut: Future<Output = R>,
    {
        self.await.fold_async(on_success, on_failure).await
    }
}

impl<T> AsyncOutcome<T, Infallible>
where
    T: Replayable,
{
    /// Re-types an infallible pending outcome so it can join a chain with
    /// any error type.
    pub fn widen_error<E: Replayable>(self) -> AsyncOutcome<T, E> {
        self.map_error(|never| match never {})
    }
}

impl<T, E> fmt::Debug for AsyncOutcome<T, E>
where
    T: Replayable + fmt::Debug,
    E: Replayable + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.settlement.peek() {
            Some(Ok(outcome)) => formatter.debug_tuple("AsyncOutcome").field(outcome).finish(),
            Some(Err(panic)) => formatter.debug_tuple("AsyncOutcome").field(panic).finish(),
            None => formatter.write_str("AsyncOutcome(<pending>)"),
        }
    }
}

impl<T, E> fmt::Display for AsyncOutcome<T, E>
where
    T: Replayable + fmt::Display,
    E: Replayable + fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.settlement.peek() {
            Some(Ok(outcome)) => write!(formatter, "{outcome}"),
            Some(Err(panic)) => write!(formatter, "{panic}"),
            None => formatter.write_str("<pending>"),
        }
    }
}
