//! Integration tests for `Outcome<T, E>`.
//!
//! Covers construction, accessors, elimination, side effects and the
//! synchronous combinators, including the short-circuit guarantees:
//! - `map` / `and_then` never call their callback on a failure
//! - `recover` / `recover_with` never call their callback on a success

use outcome::outcome::{Outcome, failure, success};
use rstest::rstest;
use std::cell::Cell;
use std::convert::Infallible;

fn divide(dividend: i32, divisor: i32) -> Outcome<i32, String> {
    if divisor == 0 {
        Outcome::failure("division by zero".to_string())
    } else {
        Outcome::success(dividend / divisor)
    }
}

fn spy<A, B>(_: A) -> B {
    panic!("callback must not be invoked")
}

// =============================================================================
// Construction and Inspection
// =============================================================================

#[rstest]
#[case(0)]
#[case(-17)]
#[case(i32::MAX)]
fn success_reports_value(#[case] value: i32) {
    let outcome: Outcome<i32, String> = success(value);
    assert!(outcome.is_ok());
    assert!(!outcome.is_error());
    assert_eq!(outcome.value_ref(), Some(&value));
    assert_eq!(outcome.error_ref(), None);
}

#[rstest]
#[case("x")]
#[case("")]
fn failure_reports_error(#[case] error: &str) {
    let outcome: Outcome<i32, &str> = failure(error);
    assert!(outcome.is_error());
    assert!(!outcome.is_ok());
    assert_eq!(outcome.error(), Some(error));
    assert_eq!(outcome.value(), None);
}

#[rstest]
fn divide_scenario() {
    assert_eq!(divide(10, 2), Outcome::success(5));
    let failed = divide(10, 0);
    assert!(failed.is_error());
    assert!(failed.error().unwrap().contains("division by zero"));
}

#[rstest]
fn into_tuple_splits_variants() {
    assert_eq!(divide(9, 3).into_tuple(), (Some(3), None));
    assert_eq!(
        divide(9, 0).into_tuple(),
        (None, Some("division by zero".to_string()))
    );
}

#[rstest]
fn as_ref_does_not_consume() {
    let outcome = divide(8, 2);
    assert_eq!(outcome.as_ref().map(|value| value * 2), Outcome::Success(8));
    assert_eq!(outcome, Outcome::Success(4));
}

// =============================================================================
// Unwrapping
// =============================================================================

#[rstest]
fn get_or_default_and_get_or_else() {
    assert_eq!(divide(6, 3).get_or_default(-1), 2);
    assert_eq!(divide(6, 0).get_or_default(-1), -1);
    assert_eq!(divide(6, 0).get_or_else(|error| error.len() as i32), 16);
}

#[rstest]
fn get_or_throw_returns_success_value() {
    assert_eq!(divide(4, 2).get_or_throw(), 2);
}

#[rstest]
fn get_or_throw_raises_with_original_cause() {
    let payload = std::panic::catch_unwind(|| divide(1, 0).get_or_throw()).unwrap_err();
    let raised = payload
        .downcast::<outcome::capture::UnwrappedFailure>()
        .expect("payload should be an UnwrappedFailure");
    assert_eq!(raised.into_cause::<String>().ok(), Some("division by zero".to_string()));
}

// =============================================================================
// Fold and Side Effects
// =============================================================================

#[rstest]
fn fold_invokes_only_success_branch() {
    let result = divide(10, 5).fold(|value| value * 100, spy);
    assert_eq!(result, 200);
}

#[rstest]
fn fold_invokes_only_failure_branch() {
    let result: usize = divide(10, 0).fold(spy, |error| error.len());
    assert_eq!(result, 16);
}

#[rstest]
fn on_success_and_on_failure_return_outcome_unchanged() {
    let successes = Cell::new(0);
    let failures = Cell::new(0);

    let ok = divide(4, 2)
        .on_success(|_| successes.set(successes.get() + 1))
        .on_failure(|_| failures.set(failures.get() + 1));
    let failed = divide(4, 0)
        .on_success(|_| successes.set(successes.get() + 1))
        .on_failure(|_| failures.set(failures.get() + 1));

    assert_eq!(ok, Outcome::Success(2));
    assert_eq!(failed, Outcome::Failure("division by zero".to_string()));
    assert_eq!((successes.get(), failures.get()), (1, 1));
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_skips_failure() {
    let failed: Outcome<i32, String> = divide(1, 0);
    assert_eq!(failed.map(spy::<i32, i32>), divide(1, 0));
}

#[rstest]
fn map_identity() {
    assert_eq!(divide(10, 2).map(|value| value), divide(10, 2));
}

#[rstest]
#[should_panic(expected = "transform exploded")]
fn map_lets_panics_unwind() {
    let _ = divide(10, 2).map(|_| -> i32 { panic!("transform exploded") });
}

#[rstest]
fn and_then_adopts_returned_outcome() {
    assert_eq!(divide(100, 5).and_then(|value| divide(value, 2)), Outcome::Success(10));
    assert_eq!(
        divide(100, 5).and_then(|value| divide(value, 0)),
        Outcome::Failure("division by zero".to_string())
    );
    assert_eq!(divide(100, 0).and_then(spy::<i32, Outcome<i32, String>>), divide(1, 0));
}

#[rstest]
fn map_error_transforms_only_failure() {
    assert_eq!(divide(4, 0).map_error(|error| error.len()), Outcome::Failure(16));
    assert_eq!(divide(4, 2).map_error(spy::<String, usize>), Outcome::Success(2));
}

// =============================================================================
// Recovery
// =============================================================================

#[rstest]
fn recover_skips_success() {
    let recovered: Outcome<i32, Infallible> = divide(8, 4).recover(spy);
    assert_eq!(recovered.into_value(), 2);
}

#[rstest]
fn recover_turns_failure_into_success() {
    assert_eq!(divide(8, 0).recover(|_| 0).into_value(), 0);
}

#[rstest]
fn recover_with_replaces_error_type() {
    #[derive(Debug, PartialEq)]
    enum CacheError {
        Cold,
    }

    fn primary() -> Outcome<&'static str, String> {
        Outcome::Failure("primary unavailable".to_string())
    }

    fn fallback() -> Outcome<&'static str, CacheError> {
        Outcome::Success("from cache")
    }

    let served: Outcome<&str, CacheError> = primary().recover_with(|_| fallback());
    assert_eq!(served, Outcome::Success("from cache"));

    let cold: Outcome<&str, CacheError> = primary().recover_with(|_| Outcome::Failure(CacheError::Cold));
    assert_eq!(cold, Outcome::Failure(CacheError::Cold));
}

#[rstest]
fn widen_error_allows_recombination() {
    let recovered = divide(1, 0).recover(|_| 7).widen_error::<String>();
    assert_eq!(recovered.zip(divide(6, 3)), Outcome::Success((7, 2)));
}

// =============================================================================
// Aggregation
// =============================================================================

#[rstest]
fn all_collects_in_order() {
    let combined = Outcome::all(vec![
        Outcome::<i32, &str>::Success(1),
        Outcome::Success(2),
        Outcome::Success(3),
    ]);
    assert_eq!(combined, Outcome::Success(vec![1, 2, 3]));
}

#[rstest]
fn all_returns_first_failure() {
    let combined = Outcome::all(vec![
        Outcome::Success(1),
        Outcome::Failure("x"),
        Outcome::Success(2),
        Outcome::Failure("y"),
    ]);
    assert_eq!(combined, Outcome::Failure("x"));
}

#[rstest]
fn all_stops_pulling_after_failure() {
    let pulled = Cell::new(0);
    let combined: Outcome<Vec<i32>, &str> = (0..10)
        .map(|index| {
            pulled.set(pulled.get() + 1);
            if index == 2 { Outcome::Failure("third") } else { Outcome::Success(index) }
        })
        .collect();
    assert_eq!(combined, Outcome::Failure("third"));
    assert_eq!(pulled.get(), 3);
}

// =============================================================================
// Conversion and Formatting
// =============================================================================

#[rstest]
fn result_round_trip() {
    let from_ok: Outcome<i32, String> = Ok(1).into();
    let from_err: Outcome<i32, String> = Err("e".to_string()).into();
    assert_eq!(from_ok, Outcome::Success(1));
    assert_eq!(Result::from(from_err), Err("e".to_string()));
}

#[rstest]
fn into_result_supports_question_mark() {
    fn halve_twice(value: i32) -> Result<i32, String> {
        let half = divide(value, 2).into_result()?;
        divide(half, 2).into_result()
    }

    assert_eq!(halve_twice(20), Ok(5));
}

#[rstest]
#[case(divide(6, 2), "success(3)")]
#[case(divide(6, 0), "failure(division by zero)")]
fn display_names_variant(#[case] outcome: Outcome<i32, String>, #[case] expected: &str) {
    assert_eq!(outcome.to_string(), expected);
}
