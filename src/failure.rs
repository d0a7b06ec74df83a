//! The failure half of an [`Outcome`](crate::Outcome).
//!
//! A [`Failure`] carries three things:
//!
//! - the error payload, stored verbatim;
//! - a diagnostic trace captured once, when the failure is built;
//! - an `attempted` marker consumed by [`attempt`](crate::attempt).
//!
//! # Examples
//!
//! ```
//! use ripple::Failure;
//!
//! let mut failure = Failure::new("connection reset");
//! assert_eq!(failure.error(), &"connection reset");
//! assert!(!failure.is_attempted());
//!
//! failure.mark_attempted();
//! assert!(failure.is_attempted());
//! ```

use std::backtrace::Backtrace;
use std::fmt;

use crate::render;

/// An error value together with the context in which it was produced.
///
/// The trace is display-only data. It is never compared, so two failures
/// with equal payloads and equal `attempted` markers are equal no matter
/// where they were built.
#[derive(Clone)]
pub struct Failure<E> {
    error: E,
    trace: String,
    attempted: bool,
}

impl<E> Failure<E> {
    /// Wrap an error, capturing the current backtrace.
    ///
    /// Capture follows `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`; when both are
    /// unset the trace holds the backtrace's "disabled" text.
    pub fn new(error: E) -> Self {
        Failure {
            error,
            trace: Backtrace::capture().to_string(),
            attempted: false,
        }
    }

    /// Get a reference to the error payload.
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Consume the failure and return the error payload.
    pub fn into_error(self) -> E {
        self.error
    }

    /// The backtrace text captured at construction.
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// Returns `true` once this failure has been through a retry cycle.
    pub fn is_attempted(&self) -> bool {
        self.attempted
    }

    /// Mark this failure as already retried.
    ///
    /// This is the only mutation a failure supports, and it is one-way:
    /// there is no way to clear the marker. [`attempt`](crate::attempt)
    /// returns a failure carrying the marker without retrying it.
    pub fn mark_attempted(&mut self) {
        self.attempted = true;
    }

    /// Borrow the payload, keeping the trace and marker.
    pub fn as_ref(&self) -> Failure<&E> {
        Failure {
            error: &self.error,
            trace: self.trace.clone(),
            attempted: self.attempted,
        }
    }

    /// Replace the payload. The result is a new failure with its own trace.
    pub(crate) fn map<F, G>(self, f: G) -> Failure<F>
    where
        G: FnOnce(E) -> F,
    {
        Failure::new(f(self.error))
    }
}

impl<E: fmt::Display> Failure<E> {
    /// Render the failure followed by its trace, newline-separated.
    ///
    /// Meant for debugging output, not for control flow.
    ///
    /// ```
    /// use ripple::Failure;
    ///
    /// let failure = Failure::new("disk full");
    /// assert!(failure.stack().starts_with("Err(disk full)\n"));
    /// ```
    pub fn stack(&self) -> String {
        format!("{}\n{}", render::display(self), self.trace)
    }
}

impl<E: fmt::Display> fmt::Display for Failure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Err({})", self.error)
    }
}

impl<E: fmt::Debug> fmt::Debug for Failure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("error", &self.error)
            .field("attempted", &self.attempted)
            .finish_non_exhaustive()
    }
}

impl<E: PartialEq> PartialEq for Failure<E> {
    fn eq(&self, other: &Self) -> bool {
        self.error == other.error && self.attempted == other.attempted
    }
}

impl<E: Eq> Eq for Failure<E> {}

impl<E> From<E> for Failure<E> {
    fn from(error: E) -> Self {
        Failure::new(error)
    }
}
