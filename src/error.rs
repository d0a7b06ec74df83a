//! Error types raised or produced by the outcome algebra.
//!
//! - [`Violation`]: the message carried by a panic from `unwrap`, `expect`,
//!   `expect_err` or `unwrap_err` called on the wrong variant.
//! - [`Panicked`]: the payload of a panic captured by [`wrap`](crate::wrap)
//!   or [`wrap_async`](crate::wrap_async).

use std::any::Any;
use std::fmt;

/// A caller's assumption about which variant is present was wrong.
///
/// The algebra panics with the `Display` form of this value. It is public so
/// callers can build the same messages, for example in their own assertion
/// helpers.
///
/// # Examples
///
/// ```rust
/// use ripple::error::Violation;
///
/// let violation = Violation::NotAFailure { msg: "expected a timeout".to_string() };
/// assert_eq!(
///     violation.to_string(),
///     "expected a timeout: called `Outcome::expect_err()` on a `Success` value"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// `unwrap()` on a failure.
    Unwrap {
        /// Debug form of the error payload.
        error: String,
        /// Trace captured when the failure was built.
        trace: String,
    },
    /// `expect(msg)` on a failure.
    Expect {
        /// The caller's message.
        msg: String,
        /// Debug form of the error payload.
        error: String,
        /// Trace captured when the failure was built.
        trace: String,
    },
    /// `expect_err(msg)` on a success.
    NotAFailure {
        /// The caller's message.
        msg: String,
    },
    /// `unwrap_err()` on a success.
    UnwrapErr,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Unwrap { error, trace } => write!(
                f,
                "called `Outcome::unwrap()` on a `Failure` value: {}\n{}",
                error, trace
            ),
            Violation::Expect { msg, error, trace } => write!(f, "{}: {}\n{}", msg, error, trace),
            Violation::NotAFailure { msg } => write!(
                f,
                "{}: called `Outcome::expect_err()` on a `Success` value",
                msg
            ),
            Violation::UnwrapErr => write!(f, "called `Outcome::unwrap_err()` on a `Success` value"),
        }
    }
}

impl std::error::Error for Violation {}

/// The payload of a panic caught while running a wrapped operation.
///
/// The payload is kept exactly as it was raised: `panic!("x")` leaves a
/// `&'static str`, a formatted `panic!` leaves a `String`, and
/// [`std::panic::panic_any`] leaves whatever value was passed.
///
/// # Examples
///
/// ```rust
/// use ripple::wrap;
///
/// let outcome = wrap(|| -> i32 { panic!("x") });
/// let panicked = outcome.into_error().unwrap();
/// assert_eq!(panicked.downcast_ref::<&str>(), Some(&"x"));
/// assert_eq!(panicked.message(), Some("x"));
/// ```
pub struct Panicked {
    payload: Box<dyn Any + Send + 'static>,
}

impl Panicked {
    /// Wrap a raw panic payload.
    pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Panicked { payload }
    }

    /// Attempt to view the payload as a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Returns `true` if the payload is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// The panic message, when the payload is a string.
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.payload.downcast_ref::<&'static str>() {
            Some(*s)
        } else {
            self.payload.downcast_ref::<String>().map(String::as_str)
        }
    }

    /// Consume the wrapper and return the raw payload.
    ///
    /// Pass it to [`std::panic::resume_unwind`] to continue unwinding.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }
}

impl fmt::Debug for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => f.debug_tuple("Panicked").field(&msg).finish(),
            None => f.debug_tuple("Panicked").field(&"<non-string payload>").finish(),
        }
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => write!(f, "{}", msg),
            None => write!(f, "panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for Panicked {}
