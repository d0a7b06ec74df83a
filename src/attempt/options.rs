//! Configuration for the [`attempt`](crate::attempt) retry combinator.

use std::time::Duration;

/// How many times to invoke an operation and how long to wait in between.
///
/// Options are plain data: they describe the retry loop but never run it,
/// so they are easy to build, compare and load from configuration.
///
/// | Field      | Default | Meaning                                            |
/// |------------|---------|----------------------------------------------------|
/// | `attempts` | 3       | Maximum invocations of the operation (at least 1)  |
/// | `delay`    | 1000 ms | Wait before the second invocation                  |
/// | `backoff`  | 0.5     | Growth factor of the wait for later invocations     |
///
/// The delay is only a pause between invocations. It is not a deadline on
/// any single invocation.
///
/// # Examples
///
/// ```rust
/// use ripple::AttemptOptions;
/// use std::time::Duration;
///
/// let options = AttemptOptions::new()
///     .with_attempts(5)
///     .with_delay(Duration::from_millis(200))
///     .with_backoff(1.0);
///
/// assert_eq!(options.max_attempts(), 5);
/// assert_eq!(options.delay(), Duration::from_millis(200));
/// // After the second invocation the wait is 200ms * (1 + 1.0)^2.
/// assert_eq!(options.delay_after(2), Duration::from_millis(800));
/// ```
///
/// With the `serde` feature the options load from configuration, the delay
/// being given in milliseconds under the key `timeout`:
///
/// ```rust,ignore
/// let options: AttemptOptions =
///     serde_json::from_str(r#"{ "attempts": 5, "timeout": 250 }"#)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttemptOptions {
    attempts: u32,
    #[cfg_attr(feature = "serde", serde(rename = "timeout", with = "millis"))]
    delay: Duration,
    backoff: f64,
}

/// Default maximum number of invocations.
pub const DEFAULT_ATTEMPTS: u32 = 3;

/// Default wait before the second invocation.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Default growth factor.
pub const DEFAULT_BACKOFF: f64 = 0.5;

impl Default for AttemptOptions {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            delay: DEFAULT_DELAY,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

impl AttemptOptions {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of invocations. Values below 1 mean 1.
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    /// Set the wait before the second invocation.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the growth factor applied to later waits.
    pub fn with_backoff(mut self, backoff: f64) -> Self {
        self.backoff = backoff;
        self
    }

    /// Maximum number of invocations, never less than 1.
    pub fn max_attempts(&self) -> u32 {
        self.attempts.max(1)
    }

    /// The initial wait.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The growth factor.
    pub fn backoff(&self) -> f64 {
        self.backoff
    }

    /// The wait that follows invocation number `count` (1-indexed), for
    /// `count >= 2`: `delay * (1 + backoff)^count`.
    ///
    /// The first wait is always `delay` itself. The exponent is the number
    /// of invocations made so far, so the wait after the second invocation
    /// already grows by `(1 + backoff)^2`.
    ///
    /// Results saturate: a curve that overflows yields the largest
    /// representable delay and a negative or undefined one yields zero.
    ///
    /// ```rust
    /// use ripple::AttemptOptions;
    /// use std::time::Duration;
    ///
    /// let options = AttemptOptions::default();
    /// assert_eq!(options.delay_after(2), Duration::from_millis(2250));
    /// assert_eq!(options.delay_after(3), Duration::from_micros(3_375_000));
    /// ```
    pub fn delay_after(&self, count: u32) -> Duration {
        let exponent = i32::try_from(count).unwrap_or(i32::MAX);
        let factor = (1.0 + self.backoff).powi(exponent);
        let nanos = self.delay.as_nanos() as f64 * factor;

        if nanos.is_nan() || nanos <= 0.0 {
            Duration::ZERO
        } else if nanos >= u64::MAX as f64 {
            Duration::from_nanos(u64::MAX)
        } else {
            Duration::from_nanos(nanos.round() as u64)
        }
    }

    /// Check that the growth factor is usable.
    ///
    /// Returns an error message for a negative or non-finite backoff.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.backoff.is_finite() {
            Err("AttemptOptions backoff must be a finite number")
        } else if self.backoff < 0.0 {
            Err("AttemptOptions backoff must not be negative")
        } else {
            Ok(())
        }
    }
}

#[cfg(feature = "serde")]
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AttemptOptions::default();
        assert_eq!(options.max_attempts(), 3);
        assert_eq!(options.delay(), Duration::from_millis(1000));
        assert_eq!(options.backoff(), 0.5);
        assert_eq!(options, AttemptOptions::new());
    }

    #[test]
    fn test_attempts_clamped_to_one() {
        assert_eq!(AttemptOptions::new().with_attempts(0).max_attempts(), 1);
        assert_eq!(AttemptOptions::new().with_attempts(1).max_attempts(), 1);
        assert_eq!(AttemptOptions::new().with_attempts(7).max_attempts(), 7);
    }

    #[test]
    fn test_delay_curve_uses_invocation_count() {
        let options = AttemptOptions::new()
            .with_delay(Duration::from_millis(100))
            .with_backoff(1.0);

        assert_eq!(options.delay_after(2), Duration::from_millis(400));
        assert_eq!(options.delay_after(3), Duration::from_millis(800));
        assert_eq!(options.delay_after(4), Duration::from_millis(1600));
    }

    #[test]
    fn test_zero_backoff_is_constant() {
        let options = AttemptOptions::new()
            .with_delay(Duration::from_millis(30))
            .with_backoff(0.0);

        for count in 1..10 {
            assert_eq!(options.delay_after(count), Duration::from_millis(30));
        }
    }

    #[test]
    fn test_zero_delay_stays_zero() {
        let options = AttemptOptions::new().with_delay(Duration::ZERO);
        assert_eq!(options.delay_after(5), Duration::ZERO);
    }

    #[test]
    fn test_delay_curve_saturates() {
        let options = AttemptOptions::new()
            .with_delay(Duration::from_secs(1))
            .with_backoff(10.0);
        assert_eq!(options.delay_after(1_000), Duration::from_nanos(u64::MAX));

        let nonsense = AttemptOptions::new().with_backoff(f64::NAN);
        assert_eq!(nonsense.delay_after(2), Duration::ZERO);
    }

    #[test]
    fn test_validate() {
        assert!(AttemptOptions::default().validate().is_ok());
        assert!(AttemptOptions::new().with_backoff(0.0).validate().is_ok());
        assert!(AttemptOptions::new().with_backoff(-0.1).validate().is_err());
        assert!(AttemptOptions::new()
            .with_backoff(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_load_partial_config() {
            let options: AttemptOptions =
                serde_json::from_str(r#"{ "attempts": 5, "timeout": 250 }"#).unwrap();
            assert_eq!(options.max_attempts(), 5);
            assert_eq!(options.delay(), Duration::from_millis(250));
            assert_eq!(options.backoff(), DEFAULT_BACKOFF);
        }

        #[test]
        fn test_empty_config_is_default() {
            let options: AttemptOptions = serde_json::from_str("{}").unwrap();
            assert_eq!(options, AttemptOptions::default());
        }

        #[test]
        fn test_serialize_uses_millis() {
            let json = serde_json::to_value(AttemptOptions::default()).unwrap();
            assert_eq!(
                json,
                serde_json::json!({ "attempts": 3, "timeout": 1000, "backoff": 0.5 })
            );
        }
    }
}
