//! Retry with exponential backoff and jitter.

use std::future::Future;
use std::time::Duration;

use crate::error::{ErrorKind, SparkError};

/// Jitter added to each backoff delay, uniform in [0, JITTER_MS).
const JITTER_MS: u64 = 100;

/// Retry policy configuration.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Base for the exponential backoff between attempts.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Execute an async operation with retry.
    ///
    /// Retries everything except errors classified as validation failures.
    pub async fn execute<F, Fut, T>(&self, operation: F) -> Result<T, SparkError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, SparkError>>,
    {
        self.execute_with(operation, |e| e.kind() != ErrorKind::Validation)
            .await
    }

    /// Execute an async operation with retry and a custom retry predicate.
    ///
    /// The first attempt runs immediately; the delay before attempt k+1 is
    /// `base_delay * 2^(k-1)` plus jitter. The error from the final attempt
    /// is the one surfaced when attempts run out.
    pub async fn execute_with<F, Fut, T, P>(
        &self,
        mut operation: F,
        should_retry: P,
    ) -> Result<T, SparkError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, SparkError>>,
        P: Fn(&SparkError) -> bool,
    {
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if attempt == self.max_attempts || !should_retry(&e) {
                        return Err(e);
                    }

                    let delay = self.backoff_delay(attempt);
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Attempt failed, retrying"
                    );
                    tokio::time::sleep(delay).await;

                    last_error = Some(e);
                }
            }
        }

        // Unreachable while max_attempts > 0; kept as a terminal fallback.
        Err(last_error.unwrap_or(SparkError::Timeout(0)))
    }

    /// Delay after `attempt` (1-based) has failed.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let base_ms = self.base_delay.as_millis() as u64;
        let exp_ms = base_ms.saturating_mul(2u64.saturating_pow(attempt.saturating_sub(1)));
        Duration::from_millis(exp_ms.saturating_add(jitter_ms()))
    }
}

/// Pseudo-random jitter in [0, JITTER_MS) without pulling in the rand crate.
fn jitter_ms() -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .hash(&mut hasher);
    std::thread::current().id().hash(&mut hasher);

    hasher.finish() % JITTER_MS
}
