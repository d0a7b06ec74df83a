//! Turning arbitrary values into display strings.
//!
//! [`display`] renders anything implementing `Display` and never panics,
//! even when the implementation reports a formatting error.
//!
//! Opaque structs usually have no useful `Display`. With the `serde` feature
//! they can be wrapped in [`Structured`], which renders them as JSON and
//! quietly falls back to their `Debug` form when serialization fails.
//!
//! ```rust,ignore
//! use ripple::{ok, render::Structured};
//!
//! #[derive(Debug, serde::Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let o = ok::<_, String>(Structured(Point { x: 1, y: 2 }));
//! assert_eq!(o.to_string(), r#"Ok({"x":1,"y":2})"#);
//! ```

use std::fmt;

/// Render `value` with its `Display` impl.
///
/// Output written before a formatting error is kept; the error itself is
/// swallowed.
///
/// ```rust
/// use ripple::render::display;
///
/// assert_eq!(display("x"), "x");
/// assert_eq!(display(&3.5), "3.5");
/// ```
pub fn display<T: fmt::Display + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    let _ = fmt::write(&mut out, format_args!("{}", value));
    out
}

/// A value rendered as JSON, or as `Debug` if it cannot be serialized.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structured<T>(pub T);

#[cfg(feature = "serde")]
impl<T> Structured<T> {
    /// Unwrap the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize + fmt::Debug> fmt::Display for Structured<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.0) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{:?}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("partial")?;
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_display_plain_values() {
        assert_eq!(display("x"), "x");
        assert_eq!(display(&42), "42");
        assert_eq!(display(&String::from("owned")), "owned");
    }

    #[test]
    fn test_display_swallows_format_errors() {
        assert_eq!(display(&Broken), "partial");
    }

    #[cfg(feature = "serde")]
    mod structured {
        use super::super::*;
        use crate::{err, ok};
        use std::collections::BTreeMap;

        #[derive(Debug, serde::Serialize)]
        struct Config {
            a: i32,
        }

        #[test]
        fn test_structured_renders_json() {
            let o = ok::<_, String>(Structured(Config { a: 1 }));
            assert_eq!(o.to_string(), r#"Ok({"a":1})"#);
        }

        #[test]
        fn test_structured_failure_payload() {
            let o = err::<String, _>(Structured(vec!["timeout", "refused"]));
            assert_eq!(o.to_string(), r#"Err(["timeout","refused"])"#);
        }

        #[test]
        fn test_structured_falls_back_to_debug() {
            // JSON object keys must be strings.
            let mut map = BTreeMap::new();
            map.insert((1u8, 2u8), 3u8);

            assert_eq!(Structured(map).to_string(), "{(1, 2): 3}");
        }
    }
}
