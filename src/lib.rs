//! # Ripple
//!
//! A tagged `Outcome<T, E>` for code that wants success and failure as
//! plain values, plus a small async retry combinator built on it.
//!
//! ## Philosophy
//!
//! **Failures are data.** An [`Outcome`] is either a `Success` or a
//! `Failure`; combinators forward failures untouched, so a pipeline reads as
//! a straight line and only the boundary decides how to handle the result.
//!
//! ## Quick Example
//!
//! ```rust
//! use ripple::{err, ok, wrap, Outcome};
//!
//! fn parse(raw: &str) -> Outcome<i64, String> {
//!     raw.trim().parse::<i64>().map_err(|e| e.to_string()).into()
//! }
//!
//! let doubled = parse(" 21 ").map(|n| n * 2);
//! assert_eq!(doubled.to_string(), "Ok(42)");
//!
//! let rejected = parse("many").and_then(|n| if n > 0 { ok(n) } else { err("not positive".into()) });
//! assert!(rejected.is_failure());
//! assert_eq!(rejected.unwrap_or(0), 0);
//!
//! // Panics become failures holding the raw payload.
//! let crashed = wrap(|| -> i64 { panic!("x") });
//! assert_eq!(crashed.unwrap_err().message(), Some("x"));
//! ```
//!
//! ## Retrying
//!
//! With the default `async` feature, [`attempt`] re-invokes an async
//! operation with a growing delay until it succeeds:
//!
//! ```rust
//! # #[cfg(feature = "async")]
//! # {
//! use ripple::{attempt, ok, AttemptOptions, Outcome};
//!
//! # tokio_test::block_on(async {
//! let outcome: Outcome<u32, String> = attempt(|| async { ok(200) }, AttemptOptions::default()).await;
//! assert_eq!(outcome.unwrap(), 200);
//! # });
//! # }
//! ```
//!
//! ## Features
//!
//! - `async` (default): [`attempt`], driven by the tokio timer.
//! - `tracing`: `debug` events and a span around each retry loop.
//! - `serde`: [`AttemptOptions`] (de)serialization and
//!   `render::Structured` JSON rendering.
//! - `proptest`: `Arbitrary` for `Outcome`.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod guard;
pub mod testing;

pub mod attempt;
pub mod error;
pub mod failure;
pub mod outcome;
pub mod render;
pub mod wrap;

// Re-exports
#[cfg(feature = "async")]
pub use attempt::attempt;
pub use attempt::AttemptOptions;
pub use error::{Panicked, Violation};
pub use failure::Failure;
pub use outcome::{err, ok, Outcome};
pub use wrap::{wrap, wrap_async};

/// Prelude module for convenient imports
pub mod prelude {
    #[cfg(feature = "async")]
    pub use crate::attempt::attempt;
    pub use crate::attempt::AttemptOptions;
    pub use crate::error::Panicked;
    pub use crate::failure::Failure;
    pub use crate::outcome::{err, ok, Outcome};
    pub use crate::wrap::{wrap, wrap_async};
    pub use crate::{assert_failure, assert_failure_eq, assert_success, is_outcome};
}
