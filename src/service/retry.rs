use std::time::Duration;

use crate::error::{retry::ErrorRetryStrategy, Error};

/// Attempt budget and backoff schedule for a retried operation.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Max attempts before failure
    pub max_attempts: u32,
    /// Initial backoff between attempts; doubles on each retry
    pub initial_backoff_secs: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_secs: 1,
        }
    }
}

impl RetryPolicy {
    /// Policy without backoff delays. Used by tests.
    pub const fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_backoff_secs: 0,
        }
    }
}

/// Context for service methods providing retry & caching logic
pub struct RetryContext<T> {
    /// cache carried between attempts to prevent unnecessary re-fetches
    cache: T,
    policy: RetryPolicy,
}

impl<T> RetryContext<T>
where
    T: Clone + Default,
{
    pub fn new() -> Self {
        Self::with_policy(RetryPolicy::default())
    }

    pub fn with_policy(policy: RetryPolicy) -> Self {
        Self {
            cache: T::default(),
            policy,
        }
    }

    /// Execute an operation with automatic retry logic.
    ///
    /// The operation receives the mutable cache and should:
    /// - Use cached data if present to skip re-fetching
    /// - Fetch from the provider when the cache is empty, storing the
    ///   result in the cache before writing to the database
    ///
    /// That way a database failure on attempt one does not trigger a second
    /// provider fetch on attempt two.
    ///
    /// # Arguments
    /// - `description`: Operation label for logging (e.g. "team ingest")
    /// - `operation`: Async function that performs fetch and store
    pub async fn execute_with_retry<R, F>(
        &mut self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: AsyncFn(&mut T) -> Result<R, Error>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.policy.max_attempts
            );

            let result = operation(&mut self.cache).await;

            match result {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::error!("Permanent error for {}: {:?}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.policy.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.policy.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff_secs =
                            self.policy.initial_backoff_secs * 2_u64.pow(attempt_count - 1);
                        let backoff = Duration::from_secs(backoff_secs);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.policy.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl<T> Default for RetryContext<T>
where
    T: Clone + Default,
{
    fn default() -> Self {
        Self::new()
    }
}
