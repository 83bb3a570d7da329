//! # outcome
//!
//! A value-based outcome type for Rust: computations that can fail return a
//! value describing success or failure instead of unwinding.
//!
//! ## Overview
//!
//! - **[`Outcome<T, E>`](outcome::Outcome)**: an immutable success-or-failure
//!   value with combinators (`map`, `and_then`, `recover`, `fold`, ...)
//! - **[`AsyncOutcome<T, E>`](async_outcome::AsyncOutcome)**: the same
//!   operator set over a pending computation whose settlement is computed
//!   once and replayed to every observer
//! - **Panic capture**: [`capture::attempt`], [`capture::wrap`] and every
//!   `*_catching` operator turn panics into failure values
//! - **Aggregation**: [`Outcome::all`](outcome::Outcome::all) and
//!   [`async_outcome::all`] combine many outcomes, stopping at the first
//!   failure
//! - **Assertions**: [`outcome::assert_ok`] and [`outcome::assert_error`]
//!   for tests
//! - **Type classes**: Functor, Applicative, Monad and Bifunctor instances
//!
//! ## Feature Flags
//!
//! - `async`: [`AsyncOutcome`](async_outcome::AsyncOutcome), async operators
//!   and the blocking runtime bridge (default)
//! - `typeclass`: type class traits and instances (default)
//! - `serde`: `Serialize` / `Deserialize` for `Outcome`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|_| format!("not a number: {input}")).into()
//! }
//!
//! let total = chain! {
//!     left <= parse("20");
//!     right <= parse("22");
//!     Outcome::success(left + right)
//! };
//! assert_eq!(total, Outcome::success(42));
//! assert!(parse("x").is_error());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and traits.
///
/// # Usage
///
/// ```rust
/// use outcome::prelude::*;
/// ```
pub mod prelude {
    pub use crate::capture::{CaughtPanic, UnwrappedFailure, attempt, attempt_with, wrap, wrap_with};
    pub use crate::chain;
    pub use crate::outcome::{Outcome, assert_error, assert_ok, failure, success};

    #[cfg(feature = "async")]
    pub use crate::async_outcome::{AsyncOutcome, ChainItem, Replayable, all, all_catching};
    #[cfg(feature = "async")]
    pub use crate::capture::{attempt_async, attempt_async_with, wrap_async};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod capture;
pub mod outcome;

#[cfg(feature = "async")]
pub mod async_outcome;

#[cfg(feature = "typeclass")]
pub mod typeclass;
