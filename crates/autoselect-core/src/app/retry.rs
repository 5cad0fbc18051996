//! Retry policy for client API requests.

use std::time::Duration;

use crate::ports::{LcuTransport, TransportError};

/// Bounded retry for transient transport failures.
///
/// Only timeouts and 5xx responses are retried; anything else is returned
/// to the caller immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts including the first one.
    pub max_attempts: u32,

    /// Delay before the first retry.
    pub base_delay: Duration,

    /// Backoff multiplier for exponential backoff.
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::ZERO,
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempts` (1-indexed):
    /// base_delay * multiplier^(attempts - 1)
    pub fn next_delay(&self, attempts: u32) -> Duration {
        let base_secs = self.base_delay.as_secs_f64();
        let exponent = i32::try_from(attempts.saturating_sub(1)).unwrap_or(i32::MAX);
        let delay_secs = base_secs * self.multiplier.powi(exponent);
        Duration::try_from_secs_f64(delay_secs).unwrap_or(Duration::MAX)
    }
}

/// GET `path`, retrying transient failures up to `policy.max_attempts`.
pub async fn request_with_retries<T: LcuTransport + ?Sized>(
    transport: &T,
    path: &str,
    policy: &RetryPolicy,
) -> Result<serde_json::Value, TransportError> {
    let mut attempts = 0;
    loop {
        attempts += 1;
        let err = match transport.get(path).await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() => err,
            Err(err) => return Err(err),
        };

        if attempts >= policy.max_attempts.max(1) {
            tracing::warn!(path, attempts, error = %err, "max retries exceeded");
            return Err(err);
        }

        tracing::debug!(path, attempts, error = %err, "transient failure, retrying");
        let delay = policy.next_delay(attempts);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
