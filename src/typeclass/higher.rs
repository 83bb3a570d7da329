//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Outcome<_, E>` as a type constructor directly.
//! [`TypeConstructor`] records the inner type and how to swap it, which is
//! all the type classes in this module need.
//!
//! ```rust
//! use outcome::outcome::Outcome;
//! use outcome::typeclass::TypeConstructor;
//!
//! fn swap_inner<T: TypeConstructor>(_: &T) -> Option<T::WithType<String>> {
//!     None
//! }
//!
//! let outcome: Outcome<i32, ()> = Outcome::success(1);
//! let swapped: Option<Outcome<String, ()>> = swap_inner(&outcome);
//! assert!(swapped.is_none());
//! ```

use crate::outcome::Outcome;

/// A type of the form `F<A>` whose `A` can be replaced.
pub trait TypeConstructor {
    /// The type currently held, `A` in `F<A>`.
    type Inner;

    /// The same constructor holding `B` instead.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

#[cfg(feature = "async")]
impl<T, E> TypeConstructor for crate::async_outcome::AsyncOutcome<T, E> {
    type Inner = T;
    type WithType<B> = crate::async_outcome::AsyncOutcome<B, E>;
}
