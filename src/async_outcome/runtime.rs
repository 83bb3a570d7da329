//! Blocking wait for pending outcomes.
//!
//! Synchronous code (a `main` without an async runtime, a test harness, a
//! callback from a C library) sometimes has to wait for an
//! [`AsyncOutcome`](super::AsyncOutcome) to settle. [`run_blocking`] drives a
//! future to completion on the current thread:
//!
//! - outside any tokio runtime, on a lazily created global multi-thread
//!   runtime;
//! - inside a multi-thread runtime, via `block_in_place`;
//! - inside a current-thread runtime it cannot block without deadlocking, so
//!   [`try_run_blocking`] returns [`BlockingError::CurrentThreadRuntime`].
//!
//! # Examples
//!
//! ```rust
//! use outcome::async_outcome::AsyncOutcome;
//! use outcome::outcome::Outcome;
//!
//! let pending = AsyncOutcome::<i32, String>::success(20).map(|x| x + 1);
//! assert_eq!(pending.wait_blocking(), Outcome::success(21));
//! ```

use std::future::Future;
use std::sync::LazyLock;

use tokio::runtime::{Builder, Handle, Runtime, RuntimeFlavor};

static GLOBAL_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    tracing::debug!(workers = num_cpus::get(), "starting global runtime for blocking waits");
    Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .enable_all()
        .build()
        .expect("Failed to create global tokio runtime")
});

/// Returns the global runtime used when no runtime is active.
#[inline]
#[must_use]
pub fn global() -> &'static Runtime {
    &GLOBAL_RUNTIME
}

/// Why a blocking wait could not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BlockingError {
    /// Called from inside a current-thread runtime.
    #[error(
        "cannot wait for an outcome in a current-thread runtime: \
         block_in_place is only supported in multi-thread runtimes"
    )]
    CurrentThreadRuntime,

    /// Called from inside a runtime of an unknown flavor.
    #[error("cannot wait for an outcome: the runtime flavor is not supported for blocking")]
    UnsupportedRuntimeFlavor,
}

/// Drives `future` to completion, blocking the current thread.
///
/// # Errors
///
/// Returns [`BlockingError`] when called from a runtime that cannot block.
#[inline]
pub fn try_run_blocking<F, T>(future: F) -> Result<T, BlockingError>
where
    F: Future<Output = T>,
{
    let Ok(current_handle) = Handle::try_current() else {
        return Ok(global().block_on(future));
    };

    match current_handle.runtime_flavor() {
        RuntimeFlavor::MultiThread => Ok(tokio::task::block_in_place(|| {
            current_handle.block_on(future)
        })),
        RuntimeFlavor::CurrentThread => Err(BlockingError::CurrentThreadRuntime),
        _ => Err(BlockingError::UnsupportedRuntimeFlavor),
    }
}

/// Drives `future` to completion, blocking the current thread.
///
/// # Panics
///
/// Panics when [`try_run_blocking`] would return an error.
#[inline]
pub fn run_blocking<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    try_run_blocking(future).expect("run_blocking failed")
}
