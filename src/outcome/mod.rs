//! The `Outcome<T, E>` type: a success value or a failure value.
//!
//! `Outcome` is an immutable tagged union. Every operation either inspects it
//! or consumes it and returns a new value; nothing mutates an outcome in
//! place. Expected failures travel in the `Failure` variant and are handled
//! exhaustively with [`Outcome::fold`], [`Outcome::recover`] or plain
//! `match`; unexpected panics are left to unwind unless a `*_catching`
//! operator is used.
//!
//! # Examples
//!
//! ```rust
//! use outcome::outcome::Outcome;
//!
//! fn divide(dividend: i32, divisor: i32) -> Outcome<i32, &'static str> {
//!     if divisor == 0 {
//!         Outcome::failure("division by zero")
//!     } else {
//!         Outcome::success(dividend / divisor)
//!     }
//! }
//!
//! assert_eq!(divide(10, 2).value(), Some(5));
//! assert_eq!(divide(10, 0).error(), Some("division by zero"));
//!
//! let message = divide(10, 0).fold(
//!     |quotient| format!("quotient: {quotient}"),
//!     |error| format!("error: {error}"),
//! );
//! assert_eq!(message, "error: division by zero");
//! ```

mod assertions;
mod combinators;
mod macros;

pub use assertions::{assert_error, assert_ok};

use std::convert::Infallible;
use std::fmt;

use crate::capture::UnwrappedFailure;

/// A value that is either a success or a failure.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value
///
/// # Examples
///
/// ```rust
/// use outcome::outcome::Outcome;
///
/// let parsed: Outcome<i32, String> = Outcome::success(42);
/// assert!(parsed.is_ok());
/// assert_eq!(parsed.map(|x| x + 1).value(), Some(43));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[must_use = "an Outcome may be a failure, which should be handled"]
pub enum Outcome<T, E> {
    /// The computation succeeded with a value.
    Success(T),
    /// The computation failed with an expected error.
    Failure(E),
}

/// Creates a success outcome. Shorthand for [`Outcome::success`].
#[inline]
pub const fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Creates a failure outcome. Shorthand for [`Outcome::failure`].
#[inline]
pub const fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a success outcome holding `value`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failure outcome holding `error`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if this is a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// assert!(Outcome::<i32, String>::success(1).is_ok());
    /// assert!(!Outcome::<i32, String>::failure("x".into()).is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a failure.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the success value, or `None` for a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(5);
    /// assert_eq!(ok.value(), Some(5));
    ///
    /// let failed: Outcome<i32, &str> = Outcome::failure("nope");
    /// assert_eq!(failed.value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure value, or `None` for a success.
    #[inline]
    pub fn error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure value if present.
    #[inline]
    pub const fn error_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Splits the outcome into a `(value, error)` pair where exactly one side
    /// is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let (value, error) = Outcome::<i32, &str>::failure("bad").into_tuple();
    /// assert_eq!(value, None);
    /// assert_eq!(error, Some("bad"));
    /// ```
    #[inline]
    pub fn into_tuple(self) -> (Option<T>, Option<E>) {
        match self {
            Self::Success(value) => (Some(value), None),
            Self::Failure(error) => (None, Some(error)),
        }
    }

    /// Returns the success value, or `fallback` for a failure.
    #[inline]
    pub fn get_or_default(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Returns the success value, or the result of `on_failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let failed: Outcome<usize, String> = Outcome::failure("abc".to_string());
    /// assert_eq!(failed.get_or_else(|error| error.len()), 3);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, on_failure: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Returns the success value, or panics with an [`UnwrappedFailure`]
    /// payload that owns the failure value and its rendered message.
    ///
    /// A catching operator that intercepts this panic records the rendered
    /// message in its [`CaughtPanic`](crate::capture::CaughtPanic).
    ///
    /// This is the one operation that turns an expected failure back into an
    /// unchecked one, for boundaries with code that expects panics.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure.
    #[track_caller]
    pub fn get_or_throw(self) -> T
    where
        E: fmt::Debug + Send + 'static,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => {
                let failure = UnwrappedFailure::new(cause);
                tracing::debug!(cause = %failure.message(), "get_or_throw called on a failure outcome");
                std::panic::panic_any(failure)
            }
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the outcome by applying exactly one of two functions.
    ///
    /// Panics raised by either function are not intercepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let ok: Outcome<i32, String> = Outcome::success(2);
    /// assert_eq!(ok.fold(|x| x * 10, |_| 0), 20);
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `action` with the success value and returns the outcome
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let outcome: Outcome<i32, String> = Outcome::success(3).on_success(|x| seen.push(*x));
    /// assert_eq!(outcome, Outcome::success(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` with the failure value and returns the outcome
    /// unchanged.
    #[inline]
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into a standard `Result`, for use with `?`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T> Outcome<T, Infallible> {
    /// Returns the value of an outcome that cannot fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let failed: Outcome<i32, String> = Outcome::failure("x".into());
    /// assert_eq!(failed.recover(|_| 0).into_value(), 0);
    /// ```
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(never) => match never {},
        }
    }

    /// Re-types an infallible outcome so it can join a chain with any error
    /// type.
    #[inline]
    pub fn widen_error<E>(self) -> Outcome<T, E> {
        Outcome::Success(self.into_value())
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "success({value})"),
            Self::Failure(error) => write!(formatter, "failure({error})"),
        }
    }
}
