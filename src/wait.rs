//! Polling waits.
//!
//! A wait runs a predicate, stops at the first truthy result, and otherwise
//! sleeps a fixed interval until the deadline passes. The predicate always
//! runs at least once, and reaching the deadline is not an error: the last
//! (falsy) result is returned to the caller.
//!
//! Time is sampled through [`tokio::time`], so tests can pause and advance
//! the clock instead of sleeping for real.

// ============================================================================
// Imports
// ============================================================================

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Default polling interval (100ms).
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

// ============================================================================
// WaitOptions
// ============================================================================

/// Polling configuration shared by every element of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitOptions {
    /// Sleep between two predicate runs, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitOptions {
    /// Creates options with the default 100ms interval.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }

    /// Sets the polling interval.
    #[inline]
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Polling interval as a [`Duration`].
    #[inline]
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

// ============================================================================
// Truthy
// ============================================================================

/// Whether a predicate result ends a wait.
///
/// Strings follow script rules: only the empty string is falsy, so `"0"`
/// (and JSON `"0"`) counts as truthy.
pub trait Truthy {
    /// Returns `true` if the value counts as success.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for &[T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! impl_truthy_for_numbers {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_numbers!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for Value {
    /// Script semantics: `null`, `false`, `0`, `""` and `[]` are falsy.
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(_) => true,
        }
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Converts a timeout in fractional seconds.
///
/// Negative values clamp to zero.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for NaN or infinite values.
pub fn timeout_from_secs(secs: f64) -> Result<Duration> {
    if !secs.is_finite() {
        return Err(Error::invalid_argument(format!(
            "wait timeout must be a finite number of seconds, got {secs}"
        )));
    }

    Duration::try_from_secs_f64(secs.max(0.0)).map_err(|err| {
        Error::invalid_argument(format!("wait timeout of {secs}s is out of range: {err}"))
    })
}

/// Runs `predicate` until it returns a truthy value or `timeout` elapses.
///
/// The deadline is computed once. After each falsy result the loop sleeps
/// `interval` and only then checks the deadline, so the predicate runs at
/// least once even for a zero timeout. On timeout the last result is
/// returned. A predicate error ends the wait immediately.
pub async fn poll_until<F, Fut, T>(timeout: Duration, interval: Duration, mut predicate: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
    T: Truthy,
{
    let start = Instant::now();
    let deadline = start.checked_add(timeout);
    let mut attempts: u32 = 0;

    loop {
        attempts = attempts.saturating_add(1);
        let result = predicate().await?;

        if result.is_truthy() {
            debug!(
                attempts,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Wait condition met"
            );
            return Ok(result);
        }

        sleep(interval).await;

        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            debug!(
                attempts,
                timeout_ms = timeout.as_millis() as u64,
                "Wait deadline reached"
            );
            return Ok(result);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
