//! Integration tests for `AsyncOutcome<T, E>`.
//!
//! These tests verify:
//! - sync to async promotion through the `_async` operators
//! - ordering of chained steps
//! - short-circuiting identical to the synchronous layer
//! - replay of a single settlement to every observer
//! - panic capture in the `*_catching` operators

#![cfg(feature = "async")]

use outcome::async_outcome::{AsyncOutcome, ChainItem, all_catching};
use outcome::capture::{CaughtPanic, attempt_async, attempt_async_with, wrap_async};
use outcome::outcome::Outcome;
use rstest::rstest;
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

static_assertions::assert_impl_all!(AsyncOutcome<String, CaughtPanic>: Send, Sync, Clone, Unpin);

async fn delayed<T>(value: T) -> T {
    tokio::time::sleep(Duration::from_millis(5)).await;
    value
}

async fn never_runs<A, B>(_: A) -> B {
    panic!("step must not run")
}

fn counted(runs: &Arc<AtomicUsize>, value: i32) -> AsyncOutcome<i32, String> {
    let runs = Arc::clone(runs);
    AsyncOutcome::from_value_future(async move {
        runs.fetch_add(1, Ordering::SeqCst);
        delayed(value).await
    })
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[tokio::test]
async fn settled_constructors() {
    assert_eq!(AsyncOutcome::<i32, String>::success(1).await, Outcome::Success(1));
    assert_eq!(
        AsyncOutcome::<i32, String>::failure("no".to_string()).await,
        Outcome::Failure("no".to_string())
    );
    let lifted: AsyncOutcome<i32, String> = Outcome::Success(2).into();
    assert_eq!(lifted.wait().await, Outcome::Success(2));
}

#[rstest]
#[tokio::test]
async fn from_future_adopts_outcome() {
    let pending: AsyncOutcome<i32, String> =
        AsyncOutcome::from_future(async { delayed(Outcome::Failure("late".to_string())).await });
    assert_eq!(pending.error().await, Some("late".to_string()));
}

#[rstest]
#[tokio::test]
async fn from_future_accepts_another_async_outcome() {
    let inner: AsyncOutcome<i32, String> = AsyncOutcome::success(5);
    let outer = AsyncOutcome::from_future(inner);
    assert_eq!(outer.value().await, Some(5));
}

#[rstest]
#[tokio::test]
async fn from_future_catching_captures_panic() {
    let pending: AsyncOutcome<i32, CaughtPanic> = AsyncOutcome::from_future_catching(async {
        tokio::task::yield_now().await;
        panic!("rejected")
    });
    assert_eq!(pending.await, Outcome::Failure(CaughtPanic::new("rejected")));
}

// =============================================================================
// Promotion and Ordering
// =============================================================================

#[rstest]
#[tokio::test]
async fn mixed_chain_settles_to_last_step() {
    let chain = AsyncOutcome::<i32, String>::from_future(async { Outcome::Success(1) })
        .map(|_| 2)
        .and_then_async(|value| async move { delayed(Outcome::Success(value + 1)).await });
    assert_eq!(chain.await, Outcome::Success(3));
}

#[rstest]
#[tokio::test]
async fn sync_outcome_promotes_with_async_step() {
    let promoted: AsyncOutcome<i32, String> =
        Outcome::Success(10).map_async(|value| async move { delayed(value * 2).await });
    assert_eq!(promoted.map(|value| value + 1).await, Outcome::Success(21));
}

#[rstest]
#[tokio::test]
async fn steps_run_in_attachment_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (first, second, third) = (log.clone(), log.clone(), log.clone());

    let chain = AsyncOutcome::<i32, String>::from_value_future(delayed(1))
        .map_async(move |value| async move {
            delayed(()).await;
            first.lock().unwrap().push("slow async map");
            value + 1
        })
        .map(move |value| {
            second.lock().unwrap().push("sync map");
            value * 10
        })
        .on_success(move |_| third.lock().unwrap().push("on_success"));

    assert_eq!(chain.await, Outcome::Success(20));
    assert_eq!(*log.lock().unwrap(), vec!["slow async map", "sync map", "on_success"]);
}

// =============================================================================
// Short-circuiting
// =============================================================================

#[rstest]
#[tokio::test]
async fn failure_skips_every_transform() {
    let chain = AsyncOutcome::<i32, String>::failure("stop".to_string())
        .map(|_| -> i32 { panic!("map must not run") })
        .map_async(never_runs::<i32, i32>)
        .and_then(|_| -> Outcome<i32, String> { panic!("and_then must not run") })
        .and_then_async(never_runs::<i32, Outcome<i32, String>>);
    assert_eq!(chain.await, Outcome::Failure("stop".to_string()));
}

#[rstest]
#[tokio::test]
async fn success_skips_every_recovery() {
    let recovered: AsyncOutcome<i32, Infallible> = AsyncOutcome::<i32, String>::success(4)
        .recover_with(|_| -> Outcome<i32, String> { panic!("recover_with must not run") })
        .recover_async(|_| async { panic!("recover_async must not run") });
    assert_eq!(recovered.await, Outcome::Success(4));
}

#[rstest]
#[tokio::test]
async fn recover_with_async_swaps_error_type() {
    let served: AsyncOutcome<&'static str, u16> =
        AsyncOutcome::<&'static str, String>::failure("primary".to_string())
            .recover_with_async(|_| async { delayed(Outcome::Success("fallback")).await });
    assert_eq!(served.await, Outcome::Success("fallback"));
}

#[rstest]
#[tokio::test]
async fn map_error_and_zip() {
    let left: AsyncOutcome<i32, String> = AsyncOutcome::success(1);
    let right: AsyncOutcome<&'static str, String> = AsyncOutcome::from_value_future(delayed("b"));
    assert_eq!(left.zip(right).await, Outcome::Success((1, "b")));

    let failed = AsyncOutcome::<i32, String>::failure("abc".to_string()).map_error(|error| error.len());
    assert_eq!(failed.await, Outcome::Failure(3));
}

// =============================================================================
// Side Effects
// =============================================================================

#[rstest]
#[tokio::test]
async fn side_effects_observe_matching_variant_only() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let (on_ok, on_err, on_ok_async, on_err_async) =
        (seen.clone(), seen.clone(), seen.clone(), seen.clone());

    let outcome = AsyncOutcome::<i32, String>::failure("e".to_string())
        .on_success(move |value| on_ok.lock().unwrap().push(format!("ok {value}")))
        .on_failure(move |error| on_err.lock().unwrap().push(format!("err {error}")))
        .on_success_async(move |value| async move {
            on_ok_async.lock().unwrap().push(format!("ok async {value}"));
        })
        .on_failure_async(move |error| async move {
            on_err_async.lock().unwrap().push(format!("err async {error}"));
        });

    assert_eq!(outcome.await, Outcome::Failure("e".to_string()));
    assert_eq!(*seen.lock().unwrap(), vec!["err e", "err async e"]);
}

// =============================================================================
// Replay
// =============================================================================

#[rstest]
#[tokio::test]
async fn clones_replay_one_settlement() {
    let runs = Arc::new(AtomicUsize::new(0));
    let pending = counted(&runs, 3);

    let doubled = pending.clone().map(|value| value * 2);
    let negated = pending.clone().map(|value| -value);

    assert_eq!(doubled.await, Outcome::Success(6));
    assert_eq!(negated.await, Outcome::Success(-3));
    assert_eq!(pending.await, Outcome::Success(3));
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn concurrent_observers_share_settlement() {
    let runs = Arc::new(AtomicUsize::new(0));
    let pending = counted(&runs, 9);

    let handles: Vec<_> = (0..4).map(|_| tokio::spawn(pending.clone().wait())).collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap(), Outcome::Success(9));
    }
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn nothing_runs_before_first_poll() {
    let runs = Arc::new(AtomicUsize::new(0));
    let pending = counted(&runs, 1).map(|value| value + 1);
    tokio::task::yield_now().await;
    assert_eq!(runs.load(Ordering::SeqCst), 0);
    assert!(pending.peek().is_none());

    assert_eq!(pending.clone().await, Outcome::Success(2));
    assert_eq!(pending.peek(), Some(&Outcome::Success(2)));
}

#[rstest]
#[tokio::test]
async fn clones_replay_the_same_panic() {
    let pending: AsyncOutcome<i32, CaughtPanic> =
        AsyncOutcome::success(1).map(|_| -> i32 { panic!("original failure") });

    let first = AsyncOutcome::from_future_catching(pending.clone()).await;
    let second = AsyncOutcome::from_future_catching(pending.clone()).await;
    let aggregated = all_catching(vec![ChainItem::from(pending)]).await;

    let expected = CaughtPanic::new("original failure");
    assert_eq!(first, Outcome::Failure(expected.clone()));
    assert_eq!(second, Outcome::Failure(expected.clone()));
    assert_eq!(aggregated, Outcome::Failure(expected));
}

#[rstest]
#[tokio::test]
async fn every_observer_unwinds_with_the_original_message() {
    let pending: AsyncOutcome<i32, String> =
        AsyncOutcome::from_value_future(async { panic!("disk unavailable") });

    let handles: Vec<_> = (0..3).map(|_| tokio::spawn(pending.clone().wait())).collect();
    for handle in handles {
        let payload = handle.await.unwrap_err().into_panic();
        let message = payload.downcast_ref::<String>().map(String::as_str);
        assert_eq!(message, Some("disk unavailable"));
    }
}

#[rstest]
#[tokio::test]
async fn rethrown_failure_is_captured_with_its_cause() {
    let failed: AsyncOutcome<i32, String> = AsyncOutcome::failure("division by zero".to_string());
    let shared = failed.and_then(|value| Outcome::Success(value + 1));

    let caught: Outcome<i32, CaughtPanic> = attempt_async(move || shared.get_or_throw()).await;
    assert_eq!(caught, Outcome::Failure(CaughtPanic::new("division by zero")));

    let mapped: Outcome<i32, String> = AsyncOutcome::<i32, String>::success(2)
        .map_catching(|_| Outcome::<i32, String>::failure("nested".to_string()).get_or_throw())
        .await;
    assert_eq!(mapped, Outcome::Failure("nested".to_string()));
}

// =============================================================================
// Catching Operators
// =============================================================================

#[rstest]
#[tokio::test]
async fn map_catching_variants_capture_panics() {
    let sync_panic = AsyncOutcome::<i32, CaughtPanic>::success(1).map_catching(|_| -> i32 { panic!("sync") });
    let async_panic: AsyncOutcome<i32, CaughtPanic> = AsyncOutcome::<i32, CaughtPanic>::success(1)
        .map_async_catching(|_| async { panic!("async") });
    let outcome_panic: AsyncOutcome<i32, CaughtPanic> = AsyncOutcome::<i32, CaughtPanic>::success(1)
        .and_then_async_catching(|_| async { panic!("adopted") });

    assert_eq!(sync_panic.await, Outcome::Failure(CaughtPanic::new("sync")));
    assert_eq!(async_panic.await, Outcome::Failure(CaughtPanic::new("async")));
    assert_eq!(outcome_panic.await, Outcome::Failure(CaughtPanic::new("adopted")));
}

#[rstest]
#[tokio::test]
async fn recover_catching_variants_capture_panics() {
    let sync_panic = AsyncOutcome::<i32, String>::failure("e".to_string())
        .recover_catching(|_| -> i32 { panic!("fallback") });
    let async_panic: AsyncOutcome<i32, String> = AsyncOutcome::<i32, String>::failure("e".to_string())
        .recover_with_async_catching(|_| async { panic!("async fallback") });
    let recovered = AsyncOutcome::<i32, String>::failure("e".to_string())
        .recover_async_catching(|error| async move { error.len() as i32 });

    assert_eq!(sync_panic.await, Outcome::Failure(CaughtPanic::new("fallback")));
    assert_eq!(async_panic.await, Outcome::Failure("async fallback".to_string()));
    assert_eq!(recovered.await, Outcome::Success(1));
}

#[rstest]
#[tokio::test]
async fn attempt_async_captures_call_and_poll_panics() {
    let call_panic = attempt_async(|| -> std::future::Ready<i32> { panic!("before future") });
    let poll_panic: AsyncOutcome<i32, CaughtPanic> = attempt_async(|| async {
        tokio::task::yield_now().await;
        panic!("inside future")
    });
    let fine = attempt_async(|| delayed(8));

    assert_eq!(call_panic.await, Outcome::Failure(CaughtPanic::new("before future")));
    assert_eq!(poll_panic.await, Outcome::Failure(CaughtPanic::new("inside future")));
    assert_eq!(fine.await, Outcome::Success(8));
}

#[rstest]
#[tokio::test]
async fn attempt_async_with_and_wrap_async() {
    let transformed: AsyncOutcome<i32, usize> =
        attempt_async_with(|| async { panic!("four") }, |panic| panic.message().len());
    assert_eq!(transformed.await, Outcome::Failure(4));

    let fetch = wrap_async(|id: u32| async move {
        assert!(id != 0, "id must be positive");
        delayed(id * 100).await
    });
    assert_eq!(fetch(2).await, Outcome::Success(200));
    assert_eq!(fetch(0).await, Outcome::Failure(CaughtPanic::new("id must be positive")));
}

// =============================================================================
// Settlement Accessors
// =============================================================================

#[rstest]
#[tokio::test]
async fn accessors_await_settlement() {
    let ok = AsyncOutcome::<i32, String>::from_value_future(delayed(3));
    let failed = AsyncOutcome::<i32, String>::failure("bad".to_string());

    assert!(ok.clone().is_ok().await);
    assert!(failed.clone().is_error().await);
    assert_eq!(ok.clone().get_or_default(0).await, 3);
    assert_eq!(failed.clone().get_or_default(0).await, 0);
    assert_eq!(failed.clone().get_or_else(|error| error.len() as i32).await, 3);
    assert_eq!(
        failed.clone().get_or_else_async(|error| async move { delayed(error.len() as i32 * 2).await }).await,
        6
    );
    assert_eq!(ok.clone().fold(|value| value + 1, |_| 0).await, 4);
    assert_eq!(
        failed
            .fold_async(|_| async { 0 }, |error| async move { error.len() })
            .await,
        3
    );
    assert_eq!(ok.get_or_throw().await, 3);
}

#[rstest]
#[tokio::test]
async fn sync_outcome_async_eliminators() {
    let failed: Outcome<i32, String> = Outcome::Failure("four".to_string());
    assert_eq!(
        failed.get_or_else_async(|error| async move { error.len() as i32 }).await,
        4
    );
    let ok: Outcome<i32, String> = Outcome::Success(1);
    assert_eq!(
        ok.fold_async(|value| async move { value * 5 }, |_| async { 0 }).await,
        5
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn wait_blocking_inside_multi_thread_runtime() {
    let pending = AsyncOutcome::<i32, String>::from_value_future(delayed(11));
    assert_eq!(pending.wait_blocking(), Outcome::Success(11));
}

#[rstest]
fn wait_blocking_without_runtime() {
    let pending = AsyncOutcome::<i32, String>::from_value_future(delayed(12)).map(|value| value + 1);
    assert_eq!(pending.wait_blocking(), Outcome::Success(13));
}
