//! Error types produced at the panic-capture boundary.
//!
//! - [`CaughtPanic`]: a panic that a catching operator converted into a
//!   failure value.
//! - [`UnwrappedFailure`]: the payload raised by
//!   [`Outcome::get_or_throw`](crate::outcome::Outcome::get_or_throw) when it
//!   is called on a failure.

use std::any::Any;
use std::fmt;

/// A panic intercepted by a catching operator.
///
/// Only the panic message is kept, so the value is `Clone`, comparable and
/// can travel through a replayed [`AsyncOutcome`](crate::async_outcome::AsyncOutcome).
/// Payloads that are neither `&str` nor `String` are recorded as
/// `"unknown panic"`.
///
/// # Examples
///
/// ```rust
/// use outcome::capture::{CaughtPanic, attempt};
///
/// let outcome = attempt(|| -> i32 { panic!("boom") });
/// assert_eq!(outcome.error(), Some(CaughtPanic::new("boom")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("panicked: {message}")]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    /// Message recorded for payloads that carry no text.
    pub const UNKNOWN_MESSAGE: &'static str = "unknown panic";

    /// Creates a `CaughtPanic` with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Builds a `CaughtPanic` from the payload returned by `catch_unwind`.
    ///
    /// Besides `&str` and `String`, an [`UnwrappedFailure`] or a
    /// `CaughtPanic` payload keeps its message, so a failure rethrown by
    /// `get_or_throw` is captured with its cause intact.
    #[must_use]
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<UnwrappedFailure>()
            .map(|failure| failure.message.clone())
            .or_else(|| text_of(payload.as_ref()))
            .unwrap_or_else(|| Self::UNKNOWN_MESSAGE.to_string());
        tracing::debug!(panic = %message, "captured panic into failure outcome");
        Self { message }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the value and returns the panic message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<CaughtPanic> for String {
    fn from(panic: CaughtPanic) -> Self {
        panic.message
    }
}

static_assertions::assert_impl_all!(CaughtPanic: Send, Sync, std::error::Error);

/// Extracts the text carried by a string or `CaughtPanic` value.
fn text_of(value: &(dyn Any + Send)) -> Option<String> {
    value
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| value.downcast_ref::<String>().cloned())
        .or_else(|| value.downcast_ref::<CaughtPanic>().map(|panic| panic.message.clone()))
}

/// Panic payload raised when a failure is forced into a value.
///
/// It owns the failure value the outcome carried, recovered with
/// [`UnwrappedFailure::cause`] or [`UnwrappedFailure::into_cause`], and a
/// rendered message. Errors that are strings (or a [`CaughtPanic`]) render
/// as their text, anything else through `Debug`.
///
/// # Examples
///
/// ```rust
/// use outcome::capture::UnwrappedFailure;
/// use outcome::outcome::Outcome;
///
/// let outcome: Outcome<i32, String> = Outcome::failure("missing".to_string());
/// let payload = std::panic::catch_unwind(|| outcome.get_or_throw()).unwrap_err();
/// let failure = payload.downcast::<UnwrappedFailure>().unwrap();
/// assert_eq!(failure.message(), "missing");
/// assert_eq!(failure.cause::<String>().map(String::as_str), Some("missing"));
/// ```
#[derive(thiserror::Error)]
#[error("called `Outcome::get_or_throw()` on a failure: {message}")]
pub struct UnwrappedFailure {
    message: String,
    cause: Box<dyn Any + Send>,
}

impl UnwrappedFailure {
    /// Wraps a failure value about to be raised.
    pub fn new<E>(cause: E) -> Self
    where
        E: fmt::Debug + Send + 'static,
    {
        let message = text_of(&cause).unwrap_or_else(|| format!("{cause:?}"));
        Self {
            message,
            cause: Box::new(cause),
        }
    }

    /// Returns the rendered failure value.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the original failure value if it has type `E`.
    pub fn cause<E: 'static>(&self) -> Option<&E> {
        self.cause.downcast_ref()
    }

    /// Returns the original failure value, or `self` back if it is not
    /// of type `E`.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged when the cause has another type.
    pub fn into_cause<E: 'static>(self) -> Result<E, Self> {
        match self.cause.downcast::<E>() {
            Ok(cause) => Ok(*cause),
            Err(cause) => Err(Self {
                message: self.message,
                cause,
            }),
        }
    }
}

impl fmt::Debug for UnwrappedFailure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("UnwrappedFailure")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(UnwrappedFailure: Send, std::error::Error);
