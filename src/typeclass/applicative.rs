//! Applicative type class.
//!
//! Applicative adds lifting of plain values (`pure`) and combination of
//! independent values (`map2`) on top of [`Functor`]. For [`Outcome`],
//! combining keeps the first failure.

use super::functor::Functor;
use crate::outcome::Outcome;

/// A functor that can lift values and combine independent computations.
///
/// # Examples
///
/// ```rust
/// use outcome::outcome::Outcome;
/// use outcome::typeclass::Applicative;
///
/// let left: Outcome<i32, String> = Outcome::success(1);
/// let right: Outcome<i32, String> = Outcome::success(2);
/// assert_eq!(left.map2(right, |a, b| a + b), Outcome::success(3));
/// ```
pub trait Applicative: Functor {
    /// Lifts `value` into the type constructor.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values with `function`.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines both values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function held in `self` to the value held in `other`.
    #[inline]
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(left), Outcome::Success(right)) => Outcome::Success(function(left, right)),
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }
}
