//! Type discrimination for [`Outcome`] values.
//!
//! [`is_outcome!`](crate::is_outcome) answers "is this value an `Outcome`?"
//! from the static type at the call site. Only values whose type is
//! `Outcome<_, _>` match; look-alike types never do, whatever their shape.
//!
//! ```
//! use ripple::{err, is_outcome, ok};
//!
//! struct Lookalike {
//!     is_success: bool,
//! }
//!
//! assert!(is_outcome!(ok::<_, ()>(1)));
//! assert!(is_outcome!(err::<(), _>(1)));
//! assert!(!is_outcome!(1));
//! assert!(!is_outcome!(None::<i32>));
//! assert!(!is_outcome!(Lookalike { is_success: true }));
//! ```
//!
//! The check is resolved by autoref specialization, so it needs a concrete
//! type. Inside a function generic over `V`, `is_outcome!(value)` is always
//! `false`; bound the function on [`OutcomeKind`] instead.

use crate::outcome::Outcome;

/// Borrowing probe the macro dispatches on.
#[doc(hidden)]
#[derive(Debug)]
pub struct Probe<'a, V: ?Sized>(pub &'a V);

/// Implemented for the probe of an [`Outcome`]; answers `true`.
pub trait OutcomeKind {
    /// Returns `true`.
    fn is_outcome(&self) -> bool {
        true
    }
}

impl<T, E> OutcomeKind for Probe<'_, Outcome<T, E>> {}

impl<T, E> OutcomeKind for Outcome<T, E> {}

/// Fallback for every other probe; answers `false`.
#[doc(hidden)]
pub trait OtherKind {
    fn is_outcome(&self) -> bool {
        false
    }
}

impl<V: ?Sized> OtherKind for &Probe<'_, V> {}

/// Returns `true` iff the expression's type is an [`Outcome`].
///
/// The expression is borrowed, not moved.
///
/// ```
/// use ripple::{is_outcome, ok};
///
/// let value = ok::<_, ()>("kept");
/// assert!(is_outcome!(value));
/// assert_eq!(value.unwrap(), "kept");
/// ```
#[macro_export]
macro_rules! is_outcome {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::guard::{OtherKind as _, OutcomeKind as _};
        (&$crate::guard::Probe(&$value)).is_outcome()
    }};
}
