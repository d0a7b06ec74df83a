//! Bounded retry for operations that produce an [`Outcome`].
//!
//! [`attempt`] invokes an async operation until one of three things happens:
//!
//! - it returns a `Success`;
//! - the configured number of invocations is used up;
//! - its first result is a `Failure` already marked as attempted.
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(feature = "async")]
//! # {
//! use ripple::{attempt, err, ok, AttemptOptions, Outcome};
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::time::Duration;
//!
//! # tokio_test::block_on(async {
//! let calls = AtomicU32::new(0);
//!
//! let outcome: Outcome<&str, &str> = attempt(
//!     || async {
//!         if calls.fetch_add(1, Ordering::SeqCst) < 2 {
//!             err("connection refused")
//!         } else {
//!             ok("connected")
//!         }
//!     },
//!     AttemptOptions::new()
//!         .with_attempts(5)
//!         .with_delay(Duration::from_millis(1)),
//! )
//! .await;
//!
//! assert_eq!(outcome.unwrap(), "connected");
//! assert_eq!(calls.load(Ordering::SeqCst), 3);
//! # });
//! # }
//! ```
//!
//! # Nested retries
//!
//! A layer that already retried can mark its final failure with
//! [`Outcome::mark_attempted`]. An outer `attempt` receiving that failure
//! as its first result returns it immediately instead of multiplying the
//! number of calls. `attempt` itself never sets the marker.
//!
//! # Panics
//!
//! Only failures returned as `Outcome` values trigger a retry. A panic inside
//! the operation is not caught and unwinds through `attempt`; wrap the
//! operation's body with [`wrap_async`](crate::wrap_async) to turn panics into
//! failures first.

mod options;

pub use options::{AttemptOptions, DEFAULT_ATTEMPTS, DEFAULT_BACKOFF, DEFAULT_DELAY};

#[cfg(feature = "async")]
use std::future::Future;

#[cfg(feature = "async")]
use crate::outcome::Outcome;

/// Invoke `operation` until it succeeds or the options say to stop.
///
/// 1. The first invocation runs immediately. A `Success`, or a `Failure`
///    already marked as attempted, is returned as-is.
/// 2. Otherwise, while fewer than `max_attempts` invocations have been made:
///    sleep, invoke again, and return at once on `Success`. The first sleep
///    is [`AttemptOptions::delay`]; after invocation `n` the next sleep is
///    [`AttemptOptions::delay_after(n)`](AttemptOptions::delay_after).
/// 3. When invocations run out, the last outcome is returned unchanged.
///
/// Sleeping uses the tokio timer and never blocks the thread. A zero delay
/// completes on the next timer turn.
///
/// # Example
///
/// ```rust
/// use ripple::{attempt, err, AttemptOptions, Outcome};
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::time::Duration;
///
/// # tokio_test::block_on(async {
/// let calls = AtomicU32::new(0);
/// let outcome: Outcome<(), &str> = attempt(
///     || async {
///         calls.fetch_add(1, Ordering::SeqCst);
///         err("e")
///     },
///     AttemptOptions::new().with_delay(Duration::ZERO).with_backoff(0.0),
/// )
/// .await;
///
/// assert_eq!(outcome.unwrap_err(), "e");
/// assert_eq!(calls.load(Ordering::SeqCst), 3);
/// # });
/// ```
#[cfg(feature = "async")]
pub async fn attempt<T, E, F, Fut>(operation: F, options: AttemptOptions) -> Outcome<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Outcome<T, E>>,
{
    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("attempt", max_attempts = options.max_attempts());

    let run = retry_loop(operation, options);

    #[cfg(feature = "tracing")]
    let run = tracing::Instrument::instrument(run, span);

    run.await
}

#[cfg(feature = "async")]
async fn retry_loop<T, E, F, Fut>(mut operation: F, options: AttemptOptions) -> Outcome<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Outcome<T, E>>,
{
    let max_attempts = options.max_attempts();
    let mut count = 1u32;
    let mut delay = options.delay();

    let mut outcome = operation().await;
    if outcome.is_success() {
        return outcome;
    }
    if outcome.is_attempted() {
        #[cfg(feature = "tracing")]
        tracing::debug!("failure already attempted upstream, not retrying");
        return outcome;
    }

    while count < max_attempts {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            attempt = count,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "attempt failed, retrying"
        );

        tokio::time::sleep(delay).await;
        outcome = operation().await;
        count += 1;
        delay = options.delay_after(count);

        if outcome.is_success() {
            return outcome;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(attempts = count, "attempts exhausted");

    outcome
}
