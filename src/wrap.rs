//! Adapters that turn code which may panic into an [`Outcome`].
//!
//! [`wrap`] runs a closure and [`wrap_async`] runs a closure producing a
//! future. A normal return becomes `Success`. A panic becomes a `Failure`
//! holding the raw payload as a [`Panicked`], with no coercion.
//!
//! Both adapters assert unwind safety on behalf of the caller: state the
//! operation was mutating when it panicked may be left half-updated.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::error::Panicked;
use crate::failure::Failure;
use crate::outcome::Outcome;

fn captured<T>(payload: Box<dyn std::any::Any + Send + 'static>) -> Outcome<T, Panicked> {
    let panicked = Panicked::new(payload);
    #[cfg(feature = "tracing")]
    tracing::debug!(message = ?panicked.message(), "captured panic from wrapped operation");
    Outcome::Failure(Failure::new(panicked))
}

/// Run `operation`, capturing a panic as a `Failure`.
///
/// # Examples
///
/// ```rust
/// use ripple::wrap;
///
/// assert_eq!(wrap(|| 42).unwrap(), 42);
///
/// let failed = wrap(|| -> i32 { panic!("x") });
/// assert!(failed.is_failure());
/// assert_eq!(failed.unwrap_err().downcast_ref::<&str>(), Some(&"x"));
/// ```
pub fn wrap<T, F>(operation: F) -> Outcome<T, Panicked>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => captured(payload),
    }
}

/// Run `operation` and await its future, capturing a panic as a `Failure`.
///
/// A panic while calling `operation` and a panic while polling the future it
/// returns are handled the same way. `operation` is called when the returned
/// future is first polled.
///
/// # Examples
///
/// ```rust
/// use ripple::wrap_async;
///
/// # tokio_test::block_on(async {
/// let value = wrap_async(|| async { 7 }).await;
/// assert_eq!(value.unwrap(), 7);
///
/// async fn explode() -> i32 {
///     panic!("rejected")
/// }
///
/// let failed = wrap_async(explode).await;
/// assert_eq!(failed.unwrap_err().message(), Some("rejected"));
/// # });
/// ```
pub async fn wrap_async<F, Fut>(operation: F) -> Outcome<Fut::Output, Panicked>
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    let future = match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(future) => future,
        Err(payload) => return captured(payload),
    };

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Outcome::Success(value),
        Err(payload) => captured(payload),
    }
}
