use std::time::Duration;

use crate::error::ErrorKind;

/// Per-attempt timeout applied by default.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Retries after the initial attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Unit of the linear backoff.
pub const DEFAULT_BACKOFF_UNIT: Duration = Duration::from_millis(500);

/// Timeout and bounded linear retry settings for one API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Deadline applied to each attempt separately.
    pub timeout: Duration,
    /// Additional attempts after the first one.
    pub max_retries: u32,
    /// Backoff grows by this amount with each failed attempt.
    pub backoff_unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_unit: DEFAULT_BACKOFF_UNIT,
        }
    }
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    pub fn no_retry(timeout: Duration) -> Self {
        Self {
            timeout,
            max_retries: 0,
            backoff_unit: Duration::ZERO,
        }
    }

    /// Total attempts including the first one.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay before the next attempt, given the zero-based index of the
    /// attempt that just failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use industrias_core::retry::RetryPolicy;
    ///
    /// let policy = RetryPolicy::default();
    /// assert_eq!(policy.backoff_delay(0), Duration::from_millis(500));
    /// assert_eq!(policy.backoff_delay(1), Duration::from_millis(1000));
    /// ```
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.backoff_unit.saturating_mul(attempt.saturating_add(1))
    }

    /// Whether a failure of `kind` on attempt `attempt` (zero-based) should
    /// be followed by another attempt.
    pub fn should_retry(&self, kind: ErrorKind, attempt: u32) -> bool {
        kind.is_retryable() && attempt.saturating_add(1) < self.max_attempts()
    }
}
