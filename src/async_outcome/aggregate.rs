//! Aggregation of independent outcome-producing items.
//!
//! [`all`] and [`all_catching`] take an ordered list of [`ChainItem`]s,
//! normalize each one into an [`AsyncOutcome`], and settle them one after
//! another in list order.
//!
//! # Early exit
//!
//! Evaluation stops at the first failure. Items after it are never
//! evaluated: their producers are not called and their futures are not
//! polled. An item that is a clone of an `AsyncOutcome` observed elsewhere
//! still settles for its other observers.

use futures::future::BoxFuture;

use super::{AsyncOutcome, Replayable};
use crate::capture::{CaughtPanic, catch_sync};
use crate::outcome::Outcome;

/// One input to [`all`] / [`all_catching`].
///
/// # Examples
///
/// ```rust,ignore
/// use outcome::async_outcome::{AsyncOutcome, ChainItem, all};
/// use outcome::outcome::Outcome;
///
/// let combined = all(vec![
///     ChainItem::value(1),
///     ChainItem::producer(|| 2),
///     ChainItem::from(Outcome::success(3)),
///     ChainItem::from(AsyncOutcome::success(4)),
///     ChainItem::future(async { 5 }),
/// ]);
/// assert_eq!(combined.await, Outcome::success(vec![1, 2, 3, 4, 5]));
/// ```
pub enum ChainItem<T, E> {
    /// A literal value.
    Value(T),
    /// A zero-argument producer, called when the item is reached.
    Producer(Box<dyn FnOnce() -> T + Send>),
    /// An already-settled outcome.
    Outcome(Outcome<T, E>),
    /// A pending outcome.
    Pending(AsyncOutcome<T, E>),
    /// A raw future producing a value.
    Future(BoxFuture<'static, T>),
}

impl<T: Replayable, E: Replayable> ChainItem<T, E> {
    /// Creates a literal-value item.
    pub const fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Creates a producer item.
    pub fn producer<F>(producer: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self::Producer(Box::new(producer))
    }

    /// Creates an item from a future producing a value.
    pub fn future<Fut>(future: Fut) -> Self
    where
        Fut: std::future::Future<Output = T> + Send + 'static,
    {
        Self::Future(Box::pin(future))
    }

    /// Normalizes the item into a pending outcome. Nothing runs until the
    /// result is polled.
    pub fn into_async(self) -> AsyncOutcome<T, E> {
        match self {
            Self::Value(value) => AsyncOutcome::success(value),
            Self::Producer(producer) => {
                AsyncOutcome::from_future(async move { Outcome::Success(producer()) })
            }
            Self::Outcome(outcome) => AsyncOutcome::settled(outcome),
            Self::Pending(pending) => pending,
            Self::Future(future) => AsyncOutcome::from_value_future(future),
        }
    }

    /// Like [`ChainItem::into_async`], but a panic from the producer or
    /// future settles to a failure.
    pub fn into_async_catching(self) -> AsyncOutcome<T, E>
    where
        E: From<CaughtPanic>,
    {
        match self {
            Self::Value(value) => AsyncOutcome::success(value),
            Self::Producer(producer) => AsyncOutcome::from_future(async move {
                catch_sync(producer).map_or_else(|panic| Outcome::Failure(panic.into()), Outcome::Success)
            }),
            Self::Outcome(outcome) => AsyncOutcome::settled(outcome),
            Self::Pending(pending) => AsyncOutcome::from_future_catching(pending),
            Self::Future(future) => AsyncOutcome::from_value_future_catching(future),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for ChainItem<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        Self::Outcome(outcome)
    }
}

impl<T, E> From<AsyncOutcome<T, E>> for ChainItem<T, E> {
    fn from(pending: AsyncOutcome<T, E>) -> Self {
        Self::Pending(pending)
    }
}

/// Combines items into one pending outcome holding every value in input
/// order, or the first failure.
///
/// Panics from producers or futures unwind to whoever awaits the result.
pub fn all<T, E, I>(items: I) -> AsyncOutcome<Vec<T>, E>
where
    T: Replayable,
    E: Replayable,
    I: IntoIterator<Item = ChainItem<T, E>>,
{
    settle_in_order(items.into_iter().map(ChainItem::into_async).collect())
}

/// Like [`all`], but a panic in any item becomes that item's failure.
pub fn all_catching<T, E, I>(items: I) -> AsyncOutcome<Vec<T>, E>
where
    T: Replayable,
    E: Replayable + From<CaughtPanic>,
    I: IntoIterator<Item = ChainItem<T, E>>,
{
    settle_in_order(items.into_iter().map(ChainItem::into_async_catching).collect())
}

fn settle_in_order<T, E>(pending: Vec<AsyncOutcome<T, E>>) -> AsyncOutcome<Vec<T>, E>
where
    T: Replayable,
    E: Replayable,
{
    AsyncOutcome::from_future(async move {
        let count = pending.len();
        let mut values = Vec::with_capacity(count);
        for (index, item) in pending.into_iter().enumerate() {
            match item.await {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(error) => {
                    tracing::trace!(index, count, "aggregation stopped at first failure");
                    return Outcome::Failure(error);
                }
            }
        }
        tracing::trace!(count, "aggregation settled every item");
        Outcome::Success(values)
    })
}
