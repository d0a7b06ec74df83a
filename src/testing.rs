//! Testing utilities for code that returns [`Outcome`](crate::Outcome)s.
//!
//! # Assertion Macros
//!
//! ```rust
//! use ripple::{assert_failure, assert_failure_eq, assert_success, err, ok};
//!
//! assert_success!(ok::<_, String>(42));
//! assert_failure!(err::<i32, _>("timeout"));
//! assert_failure_eq!(err::<i32, _>("timeout"), "timeout");
//! ```
//!
//! # Property-based testing
//!
//! With the `proptest` feature, `Outcome<T, E>` implements
//! `proptest::arbitrary::Arbitrary` whenever `T` and `E` do, generating
//! both variants.

/// Assert that an outcome is a `Success`, evaluating to the value.
///
/// # Example
///
/// ```rust
/// use ripple::{assert_success, ok};
///
/// let value = assert_success!(ok::<_, String>(42));
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(v) => v,
            $crate::Outcome::Failure(f) => {
                panic!("Expected Success, got Failure: {:?}", f.error());
            }
        }
    };
}

/// Assert that an outcome is a `Failure`, evaluating to the error payload.
///
/// # Example
///
/// ```rust
/// use ripple::{assert_failure, err};
///
/// let error = assert_failure!(err::<i32, _>("refused"));
/// assert_eq!(error, "refused");
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(f) => f.into_error(),
            $crate::Outcome::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome is a `Failure` with a specific error payload.
///
/// # Example
///
/// ```rust
/// use ripple::{assert_failure_eq, err};
///
/// assert_failure_eq!(err::<i32, _>(vec!["a", "b"]), vec!["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_failure_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Failure(f) => {
                assert_eq!(f.into_error(), $expected);
            }
            $crate::Outcome::Success(v) => {
                panic!(
                    "Expected Failure with error {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for crate::Outcome<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Self::success),
            any_with::<E>(e_params).prop_map(Self::failure),
        ]
        .boxed()
    }
}
