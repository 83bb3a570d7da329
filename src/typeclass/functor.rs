//! Functor type class.
//!
//! A Functor can have a function applied to the value it holds without
//! changing its shape. For [`Outcome`], "shape" is the variant: a failure
//! stays a failure.
//!
//! # Laws
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```

use super::higher::TypeConstructor;
use crate::outcome::Outcome;

/// A type constructor whose inner value can be mapped.
///
/// # Examples
///
/// ```rust
/// use outcome::outcome::Outcome;
/// use outcome::typeclass::Functor;
///
/// let outcome: Outcome<i32, String> = Outcome::success(5);
/// assert_eq!(outcome.fmap(|n| n.to_string()), Outcome::success("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the inner value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies `function` to a reference to the inner value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the inner value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(move |_| value)
    }

    /// Discards the inner value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B + 'static,
        B: 'static,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}
