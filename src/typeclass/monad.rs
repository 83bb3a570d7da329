//! Monad type class.
//!
//! A Monad sequences computations where each step depends on the value of
//! the previous one. For [`Outcome`], the chain stops at the first failure.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! m.flat_map(pure) == m
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;
use crate::outcome::Outcome;

/// An applicative that supports dependent sequencing.
///
/// # Examples
///
/// ```rust
/// use outcome::outcome::Outcome;
/// use outcome::typeclass::Monad;
///
/// fn half(n: i32) -> Outcome<i32, String> {
///     if n % 2 == 0 { Outcome::success(n / 2) } else { Outcome::failure(format!("{n} is odd")) }
/// }
///
/// let outcome: Outcome<i32, String> = Outcome::success(8);
/// assert_eq!(Monad::flat_map(outcome, half), Outcome::success(4));
/// ```
pub trait Monad: Applicative {
    /// Feeds the inner value to `function` and returns its result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        Monad::flat_map(self, function)
    }

    /// Sequences `next` after `self`, discarding the first value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Monad::flat_map(self, |_| next)
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

/// Flattens a nested outcome.
///
/// ```rust
/// use outcome::outcome::Outcome;
/// use outcome::typeclass::flatten;
///
/// let nested: Outcome<Outcome<i32, String>, String> = Outcome::success(Outcome::success(1));
/// assert_eq!(flatten(nested), Outcome::success(1));
/// ```
#[inline]
pub fn flatten<T, E>(nested: Outcome<Outcome<T, E>, E>) -> Outcome<T, E> {
    nested.flat_map(|inner| inner)
}
