//! Type class instances for [`Outcome`](crate::outcome::Outcome).
//!
//! Generic code written against these traits can work with outcomes the same
//! way it works with any other functor or monad:
//!
//! - [`Functor`]: map the success value
//! - [`Applicative`]: lift values and combine independent outcomes
//! - [`Monad`]: sequence dependent outcomes
//! - [`Bifunctor`]: map the error and success sides independently
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses generic
//! associated types to describe `Outcome<_, E>` as a constructor over its
//! success type.
//!
//! # Examples
//!
//! ```rust
//! use outcome::outcome::Outcome;
//! use outcome::typeclass::{Applicative, Functor};
//!
//! fn double_all<F>(container: F) -> F::WithType<i32>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| n * 2)
//! }
//!
//! let outcome: Outcome<i32, String> = Outcome::success(21);
//! assert_eq!(double_all(outcome), Outcome::success(42));
//!
//! let lifted: Outcome<i32, String> = <Outcome<(), String>>::pure(1);
//! assert!(lifted.is_ok());
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::{Monad, flatten};
