//! The `Outcome` type: success or failure of a completed operation.
//!
//! `Outcome<T, E>` is success-biased: `map` and `and_then` act on
//! `Success`, `map_err` acts on `Failure`, and each of them passes the
//! other variant through untouched. Callers chain transformations without
//! branching and decide at the boundary whether to extract safely
//! (`unwrap_or`) or assert (`unwrap` / `expect`).
//!
//! # Examples
//!
//! ```
//! use ripple::{err, ok, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => ok(port),
//!         Err(e) => err(format!("bad port {:?}: {}", raw, e)),
//!     }
//! }
//!
//! let port = parse_port("8080").map(|p| p + 1).unwrap_or(80);
//! assert_eq!(port, 8081);
//!
//! let fallback = parse_port("http").map(|p| p + 1).unwrap_or(80);
//! assert_eq!(fallback, 80);
//! ```
//!
//! # Failures are data
//!
//! A failure only turns into a panic at `unwrap`, `expect`, `expect_err` or
//! `unwrap_err`. Everywhere else it is forwarded untouched.

use std::convert::Infallible;
use std::fmt;

use crate::error::Violation;
use crate::failure::Failure;

/// The outcome of an operation: a `Success` value or a `Failure`.
///
/// # Example
///
/// ```rust
/// use ripple::Outcome;
///
/// let good: Outcome<i32, &str> = Outcome::success(21);
/// let bad: Outcome<i32, &str> = Outcome::failure("no data");
///
/// assert_eq!(good.map(|x| x * 2).unwrap(), 42);
/// assert_eq!(bad.map(|x| x * 2).unwrap_or(0), 0);
///
/// match Outcome::<i32, &str>::success(1) {
///     Outcome::Success(n) => assert_eq!(n, 1),
///     Outcome::Failure(f) => panic!("unexpected {}", f),
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// The operation succeeded with a value.
    Success(T),
    /// The operation failed.
    Failure(Failure<E>),
}

/// Build a successful outcome.
///
/// ```rust
/// use ripple::ok;
///
/// let o = ok::<_, ()>(7);
/// assert!(o.is_success());
/// assert_eq!(o.unwrap(), 7);
/// ```
#[inline]
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Build a failed outcome, capturing a trace.
///
/// ```rust
/// use ripple::err;
///
/// let o = err::<i32, _>("nope");
/// assert!(o.is_failure());
/// assert_eq!(o.unwrap_or(0), 0);
/// ```
#[inline]
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(Failure::new(error))
}

#[cold]
#[track_caller]
fn violated(violation: Violation) -> ! {
    panic!("{}", violation)
}

impl<T, E> Outcome<T, E> {
    // ========== Constructors ==========

    /// Create a `Success`.
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Create a `Failure`, capturing a trace.
    #[inline]
    pub fn failure(error: E) -> Self {
        Outcome::Failure(Failure::new(error))
    }

    // ========== Predicates ==========

    /// Returns `true` for `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns `true` for a `Failure` marked as already retried.
    ///
    /// A `Success` is never attempted.
    #[inline]
    pub fn is_attempted(&self) -> bool {
        match self {
            Outcome::Success(_) => false,
            Outcome::Failure(f) => f.is_attempted(),
        }
    }

    /// Mark a `Failure` as already retried. Does nothing on `Success`.
    ///
    /// ```rust
    /// use ripple::err;
    ///
    /// let mut o = err::<(), _>("gave up upstream");
    /// o.mark_attempted();
    /// assert!(o.is_attempted());
    /// ```
    #[inline]
    pub fn mark_attempted(&mut self) {
        if let Outcome::Failure(f) = self {
            f.mark_attempted();
        }
    }

    // ========== Borrowing ==========

    /// Convert `&Outcome<T, E>` to `Outcome<&T, &E>`.
    ///
    /// A borrowed failure keeps the original trace and marker.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(f) => Outcome::Failure(f.as_ref()),
        }
    }

    /// The failure, if this is one.
    #[inline]
    pub fn as_failure(&self) -> Option<&Failure<E>> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(f) => Some(f),
        }
    }

    // ========== Extractors ==========

    /// Returns the success value, if present.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the error payload, if present.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(f) => Some(f.into_error()),
        }
    }

    /// Convert into a standard `Result`, dropping the trace.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(f) => Err(f.into_error()),
        }
    }

    /// Returns the success value or `fallback`.
    ///
    /// On `Success` the fallback is ignored.
    ///
    /// ```rust
    /// use ripple::{err, ok};
    ///
    /// assert_eq!(ok::<_, &str>(1).unwrap_or(9), 1);
    /// assert_eq!(err::<i32, _>("x").unwrap_or(9), 9);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(_) => fallback,
        }
    }

    /// Returns the success value or computes one from the error.
    ///
    /// `f` is only called on `Failure`.
    ///
    /// ```rust
    /// use ripple::{err, ok};
    ///
    /// assert_eq!(ok::<usize, &str>(1).unwrap_or_else(|e| e.len()), 1);
    /// assert_eq!(err::<usize, _>("four").unwrap_or_else(|e| e.len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(failure) => f(failure.into_error()),
        }
    }

    /// Returns the error payload, panicking with `msg` on `Success`.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Success`.
    ///
    /// ```rust
    /// use ripple::err;
    ///
    /// assert_eq!(err::<(), _>("denied").expect_err("should be denied"), "denied");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Outcome::Success(_) => violated(Violation::NotAFailure {
                msg: msg.to_string(),
            }),
            Outcome::Failure(f) => f.into_error(),
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Outcome::Success(_) => violated(Violation::UnwrapErr),
            Outcome::Failure(f) => f.into_error(),
        }
    }

    // ========== Transformations ==========

    /// Transform the success value; failures pass through unchanged.
    ///
    /// A panic inside `f` is not caught.
    ///
    /// ```rust
    /// use ripple::{err, ok, Outcome};
    ///
    /// assert_eq!(ok::<_, ()>(2).map(|x| x + 1), ok(3));
    ///
    /// let failed: Outcome<i32, &str> = err("e");
    /// assert_eq!(failed.map(|x| x + 1).unwrap_err(), "e");
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Chain a computation that may itself fail (monadic bind).
    ///
    /// ```rust
    /// use ripple::{err, ok, Outcome};
    ///
    /// fn half(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 { ok(n / 2) } else { err(format!("{} is odd", n)) }
    /// }
    ///
    /// assert_eq!(ok(8).and_then(half).and_then(half).unwrap(), 2);
    /// assert_eq!(ok(6).and_then(half).and_then(half).unwrap_err(), "3 is odd");
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(v) => f(v),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Transform the error payload; successes pass through unchanged.
    ///
    /// The new failure captures its own trace and starts out not attempted.
    ///
    /// ```rust
    /// use ripple::{err, ok, Outcome};
    ///
    /// let o: Outcome<(), i32> = err(404);
    /// assert_eq!(o.map_err(|code| format!("http {}", code)).unwrap_err(), "http 404");
    ///
    /// assert_eq!(ok::<_, i32>(1).map_err(|c| c * 2), ok(1));
    /// ```
    #[inline]
    pub fn map_err<F, G>(self, f: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(failure) => Outcome::Failure(failure.map(f)),
        }
    }

    /// Recover from a failure with a computation that may itself fail.
    #[inline]
    pub fn or_else<F, G>(self, f: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(failure) => f(failure.into_error()),
        }
    }

    /// Call `f` with the success value, then return `self` unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(v) = &self {
            f(v);
        }
        self
    }

    /// Call `f` with the error payload, then return `self` unchanged.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Failure(failure) = &self {
            f(failure.error());
        }
        self
    }
}

impl<T, E: fmt::Debug> Outcome<T, E> {
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on `Failure`, with the error's `Debug` form and the captured
    /// trace in the message.
    ///
    /// ```rust,should_panic
    /// use ripple::err;
    ///
    /// err::<i32, _>("boom").unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(f) => violated(Violation::Unwrap {
                error: format!("{:?}", f.error()),
                trace: f.trace().to_string(),
            }),
        }
    }

    /// Returns the success value, panicking with `msg` on `Failure`.
    ///
    /// # Panics
    ///
    /// Panics on `Failure`. The message is `msg`, then the error's `Debug`
    /// form, then the captured trace.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(f) => violated(Violation::Expect {
                msg: msg.to_string(),
                error: format!("{:?}", f.error()),
                trace: f.trace().to_string(),
            }),
        }
    }
}

impl<T> Outcome<T, Infallible> {
    /// Returns the success value of an outcome that cannot fail.
    ///
    /// Only available when the failure type is uninhabited, so the compiler
    /// has already proven this is a `Success`.
    ///
    /// ```rust
    /// use ripple::{ok, Outcome};
    /// use std::convert::Infallible;
    ///
    /// let o: Outcome<&str, Infallible> = ok("always");
    /// assert_eq!(o.safe_unwrap(), "always");
    /// ```
    #[inline]
    pub fn safe_unwrap(self) -> T {
        match self {
            Outcome::Success(v) => v,
            #[allow(unreachable_code)]
            Outcome::Failure(f) => match f.into_error() {},
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Flatten a nested outcome.
    ///
    /// ```rust
    /// use ripple::{ok, Outcome};
    ///
    /// let nested: Outcome<Outcome<i32, ()>, ()> = ok(ok(1));
    /// assert_eq!(nested.flatten(), ok(1));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

// ========== Trait Implementations ==========

/// Renders `Ok(value)` or `Err(error)`.
///
/// Both parameters must be `Display`, even to render a `Failure`. For an
/// outcome whose success type is not `Display` (such as `()`), render the
/// failure half through [`Outcome::as_failure`].
impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(v) => write!(f, "Ok({})", v),
            Outcome::Failure(failure) => fmt::Display::fmt(failure, f),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Outcome::Success(v),
            Err(e) => Outcome::Failure(Failure::new(e)),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// A `Success` holding an iterable yields its elements; a `Failure`, nothing.
impl<T, E> IntoIterator for Outcome<T, E>
where
    T: IntoIterator,
{
    type Item = T::Item;
    type IntoIter = std::iter::Flatten<std::option::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter().flatten()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E>
where
    &'a T: IntoIterator,
{
    type Item = <&'a T as IntoIterator>::Item;
    type IntoIter = std::iter::Flatten<std::option::IntoIter<&'a T>>;

    fn into_iter(self) -> Self::IntoIter {
        let value = match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure(_) => None,
        };
        value.into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(ok::<_, ()>(1).is_success());
        assert!(!ok::<_, ()>(1).is_failure());
        assert!(err::<(), _>(1).is_failure());
        assert!(!err::<(), _>(1).is_success());
        assert_eq!(Outcome::<_, ()>::success(5), ok(5));
        assert_eq!(Outcome::<(), _>::failure("e"), err("e"));
    }

    #[test]
    fn test_unwrap_success() {
        assert_eq!(ok::<_, ()>("v").unwrap(), "v");
        assert_eq!(ok::<_, ()>("v").expect("must hold"), "v");
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap()` on a `Failure` value: \"boom\"")]
    fn test_unwrap_failure_panics() {
        err::<i32, _>("boom").unwrap();
    }

    #[test]
    #[should_panic(expected = "config must load: \"missing\"")]
    fn test_expect_failure_panics() {
        err::<i32, _>("missing").expect("config must load");
    }

    #[test]
    fn test_unwrap_panic_message_carries_trace() {
        let failed = err::<i32, _>("boom");
        let trace = failed.as_failure().map(|f| f.trace().to_string()).unwrap();

        let payload = std::panic::catch_unwind(|| failed.unwrap()).unwrap_err();
        let message = payload.downcast_ref::<String>().unwrap();
        assert!(message.contains("\"boom\""));
        assert!(message.contains(&trace));
    }

    #[test]
    fn test_expect_panic_message_carries_trace() {
        let failed = err::<i32, _>("missing");
        let trace = failed.as_failure().map(|f| f.trace().to_string()).unwrap();

        let payload = std::panic::catch_unwind(|| failed.expect("config must load")).unwrap_err();
        let message = payload.downcast_ref::<String>().unwrap();
        assert!(message.starts_with("config must load"));
        assert!(message.contains(&trace));
    }

    #[test]
    #[should_panic(expected = "wanted a failure: called `Outcome::expect_err()` on a `Success` value")]
    fn test_expect_err_success_panics() {
        ok::<_, ()>(1).expect_err("wanted a failure");
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap_err()` on a `Success` value")]
    fn test_unwrap_err_success_panics() {
        ok::<_, ()>(1).unwrap_err();
    }

    #[test]
    fn test_expect_err_failure() {
        assert_eq!(err::<(), _>(3).expect_err("ignored"), 3);
        assert_eq!(err::<(), _>(3).unwrap_err(), 3);
    }

    #[test]
    fn test_unwrap_or_variants() {
        assert_eq!(ok::<_, &str>(1).unwrap_or(2), 1);
        assert_eq!(err::<i32, _>("e").unwrap_or(2), 2);

        let mut called = false;
        assert_eq!(
            ok::<_, &str>(1).unwrap_or_else(|_| {
                called = true;
                2
            }),
            1
        );
        assert!(!called);
        assert_eq!(err::<usize, _>("abc").unwrap_or_else(|e| e.len()), 3);
    }

    #[test]
    fn test_map_skips_failure() {
        let mut called = false;
        let o = err::<i32, _>("e").map(|x| {
            called = true;
            x + 1
        });
        assert!(!called);
        assert_eq!(o, err("e"));
    }

    #[test]
    fn test_map_keeps_failure_identity() {
        let mut o = err::<i32, _>("e");
        o.mark_attempted();
        let trace = o.as_failure().unwrap().trace().to_string();

        let mapped = o.map(|x| x * 2).and_then(|x| ok(x + 1));
        let failure = mapped.as_failure().unwrap();
        assert!(failure.is_attempted());
        assert_eq!(failure.trace(), trace);
    }

    #[test]
    fn test_and_then() {
        assert_eq!(ok::<_, &str>(2).and_then(|x| ok(x * 10)), ok(20));
        assert_eq!(
            ok::<i32, _>(2).and_then(|_| err::<i32, _>("stop")),
            err("stop")
        );
        assert_eq!(err::<i32, _>("e").and_then(|x| ok(x * 10)), err("e"));
    }

    #[test]
    fn test_map_err() {
        let mut called = false;
        let o = ok::<_, i32>(1).map_err(|e| {
            called = true;
            e + 1
        });
        assert!(!called);
        assert_eq!(o, ok(1));

        let mut failed = err::<(), _>(1);
        failed.mark_attempted();
        let mapped = failed.map_err(|e| e + 1);
        assert!(!mapped.is_attempted());
        assert_eq!(mapped.unwrap_err(), 2);
    }

    #[test]
    #[should_panic(expected = "mapper blew up")]
    fn test_map_panics_propagate() {
        let _ = ok::<_, ()>(1).map(|_: i32| -> i32 { panic!("mapper blew up") });
    }

    #[test]
    fn test_or_else() {
        assert_eq!(
            err::<i32, _>("e").or_else(|_| ok::<_, ()>(0)),
            ok(0)
        );
        assert_eq!(ok::<_, &str>(1).or_else(|_| err::<i32, _>(())), ok(1));
    }

    #[test]
    fn test_inspect() {
        let mut seen = None;
        let o = ok::<_, ()>(5).inspect(|v| seen = Some(*v));
        assert_eq!(seen, Some(5));
        assert_eq!(o, ok(5));

        let mut seen_err = None;
        let o = err::<(), _>("x").inspect_err(|e| seen_err = Some(*e));
        assert_eq!(seen_err, Some("x"));
        assert!(o.is_failure());
    }

    #[test]
    fn test_mark_attempted_on_success_is_noop() {
        let mut o = ok::<_, ()>(1);
        o.mark_attempted();
        assert!(!o.is_attempted());
    }

    #[test]
    fn test_as_ref() {
        let o = ok::<_, ()>(String::from("hi"));
        assert_eq!(o.as_ref().map(|s| s.len()), ok(2));

        let e = err::<(), _>(String::from("bad"));
        assert_eq!(e.as_ref().unwrap_err(), "bad");
    }

    #[test]
    fn test_result_conversions() {
        let o: Outcome<i32, &str> = Ok(1).into();
        assert_eq!(o, ok(1));
        let o: Outcome<i32, &str> = Err("e").into();
        assert_eq!(o, err("e"));

        let r: Result<i32, &str> = err("e").into();
        assert_eq!(r, Err("e"));
        assert_eq!(ok::<_, ()>(1).into_result(), Ok(1));
    }

    #[test]
    fn test_into_value_and_error() {
        assert_eq!(ok::<_, ()>(1).into_value(), Some(1));
        assert_eq!(err::<i32, _>(2).into_value(), None);
        assert_eq!(ok::<_, i32>(1).into_error(), None);
        assert_eq!(err::<i32, _>(2).into_error(), Some(2));
    }

    #[test]
    fn test_flatten() {
        let nested: Outcome<Outcome<i32, &str>, &str> = ok(err("inner"));
        assert_eq!(nested.flatten(), err("inner"));

        let outer: Outcome<Outcome<i32, &str>, &str> = err("outer");
        assert_eq!(outer.flatten(), err("outer"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ok::<_, &str>("x").to_string(), "Ok(x)");
        assert_eq!(err::<&str, _>("y").to_string(), "Err(y)");
        assert_eq!(ok::<_, &str>(1.5).to_string(), "Ok(1.5)");
    }

    #[test]
    fn test_display_failure_of_unit_outcome() {
        let o: Outcome<(), &str> = err("gave up");
        let rendered = o.as_failure().map(ToString::to_string);
        assert_eq!(rendered.as_deref(), Some("Err(gave up)"));
        assert_eq!(ok::<(), &str>(()).as_failure().map(ToString::to_string), None);
    }

    #[test]
    fn test_iteration() {
        let items: Vec<i32> = ok::<_, ()>(vec![1, 2, 3]).into_iter().collect();
        assert_eq!(items, vec![1, 2, 3]);

        let none: Vec<i32> = err::<Vec<i32>, _>("e").into_iter().collect();
        assert!(none.is_empty());

        let empty: Vec<i32> = ok::<Vec<i32>, ()>(vec![]).into_iter().collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_iteration_is_lazy_and_restartable_by_ref() {
        let o = ok::<_, ()>(vec![1, 2, 3]);
        let first: Vec<&i32> = (&o).into_iter().take(2).collect();
        assert_eq!(first, vec![&1, &2]);

        let mut total = 0;
        for n in &o {
            total += n;
        }
        assert_eq!(total, 6);
        assert_eq!((&o).into_iter().count(), 3);
    }

    #[test]
    fn test_iteration_over_infinite_source_is_lazy() {
        let o = ok::<_, ()>(1..);
        let head: Vec<i32> = o.into_iter().take(3).collect();
        assert_eq!(head, vec![1, 2, 3]);
    }

    #[test]
    fn test_safe_unwrap() {
        let o: Outcome<i32, Infallible> = ok(3);
        assert_eq!(o.safe_unwrap(), 3);
    }
}
