//! Do-notation for [`Outcome`](super::Outcome) chains.
//!
//! `chain!` rewrites a block of bindings into nested `flat_map` calls, so
//! a sequence of fallible steps reads top to bottom and stops at the first
//! failure.
//!
//! # Syntax
//!
//! - `pattern <= expression;` binds the success value of an outcome
//! - `let pattern = expression;` is an ordinary binding
//! - `ensure condition, error;` fails with `error` unless `condition` holds
//! - the final line is either an expression producing an outcome, or
//!   `=> value` to finish with a success holding `value`
//!
//! # Examples
//!
//! ```rust
//! use outcome::chain;
//! use outcome::outcome::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let sum = chain! {
//!     left <= parse("40");
//!     right <= parse("2");
//!     let total = left + right;
//!     Outcome::success(total)
//! };
//! assert_eq!(sum, Outcome::success(42));
//!
//! let broken = chain! {
//!     left <= parse("40");
//!     right <= parse("two");
//!     => left + right
//! };
//! assert!(broken.is_error());
//!
//! let rejected = chain! {
//!     value <= parse("-3");
//!     ensure value >= 0, format!("{value} is negative");
//!     => value
//! };
//! assert_eq!(rejected, Outcome::failure("-3 is negative".to_string()));
//! ```

/// Chains outcome-producing steps with do-notation.
///
/// See the [module documentation](crate::outcome) for the syntax.
#[macro_export]
macro_rules! chain {
    // Terminal value, wrapped in a success
    (=> $value:expr) => {
        $crate::outcome::Outcome::Success($value)
    };

    // Guard that fails the chain when the condition is false
    (ensure $condition:expr , $error:expr ; $($rest:tt)+) => {
        if $condition {
            $crate::chain!($($rest)+)
        } else {
            $crate::outcome::Outcome::Failure($error)
        }
    };

    // Terminal outcome expression
    ($result:expr) => {
        $result
    };

    // Bind with identifier pattern
    ($pattern:ident <= $outcome:expr ; $($rest:tt)+) => {
        $crate::outcome::Outcome::flat_map($outcome, move |$pattern| {
            $crate::chain!($($rest)+)
        })
    };

    // Bind with tuple pattern
    (($($pattern:tt)*) <= $outcome:expr ; $($rest:tt)+) => {
        $crate::outcome::Outcome::flat_map($outcome, move |($($pattern)*)| {
            $crate::chain!($($rest)+)
        })
    };

    // Bind with wildcard pattern
    (_ <= $outcome:expr ; $($rest:tt)+) => {
        $crate::outcome::Outcome::flat_map($outcome, move |_| {
            $crate::chain!($($rest)+)
        })
    };

    // Let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::chain!($($rest)+)
        }
    };

    // Let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::chain!($($rest)+)
        }
    };
}
