//! Bounded retry with exponential backoff.

use crate::error::{GenError, Result};
use std::time::Duration;
use tracing::debug;

/// Retry limits for remote fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts after the first try.
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry).
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(10),
        }
    }
}

/// Failure of a single attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptError {
    pub reason: String,
    /// Whether another attempt may succeed.
    pub transient: bool,
}

impl AttemptError {
    pub fn transient(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            transient: true,
        }
    }

    pub fn permanent(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            transient: false,
        }
    }
}

/// Run `op` until it succeeds, fails permanently, or retries run out.
///
/// `location` names the resource in the resulting [`GenError::Fetch`].
pub fn retry_with_backoff<T, F>(policy: &RetryPolicy, location: &str, mut op: F) -> Result<T>
where
    F: FnMut() -> std::result::Result<T, AttemptError>,
{
    let mut backoff = policy.initial_backoff;
    let mut last_err = String::new();

    for attempt in 0..=policy.max_retries {
        if attempt > 0 {
            debug!(
                location,
                attempt,
                max_retries = policy.max_retries,
                ?backoff,
                "retrying template fetch"
            );
            std::thread::sleep(backoff);
            backoff = next_backoff(backoff, policy.max_backoff);
        }

        match op() {
            Ok(value) => return Ok(value),
            Err(err) if err.transient => last_err = err.reason,
            Err(err) => {
                return Err(GenError::Fetch {
                    location: location.to_string(),
                    reason: err.reason,
                });
            }
        }
    }

    Err(GenError::Fetch {
        location: location.to_string(),
        reason: format!(
            "all {} retries exhausted: {}",
            policy.max_retries, last_err
        ),
    })
}

/// Double the delay, capped at `max` and saturating instead of overflowing.
fn next_backoff(current: Duration, max: Duration) -> Duration {
    current.saturating_mul(2).min(max)
}
