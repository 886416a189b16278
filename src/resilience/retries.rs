//! Retry logic.
//!
//! # Responsibilities
//! - Wrap an upstream operation in bounded retries
//! - Decide per failure whether a retry is allowed (classification predicate)
//! - Sleep with exponential backoff + jitter between attempts
//!
//! # Design Decisions
//! - Only failures accepted by the predicate are retried; everything else returns at once
//! - Once attempts are exhausted the last failure is returned unchanged
//! - Delays suspend only the calling task

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use crate::config::RetryConfig;
use crate::observability::metrics;
use crate::resilience::backoff::calculate_backoff;

/// State of one logical call while it is being retried.
#[derive(Debug)]
pub struct RetryContext<'a, E> {
    pub operation: &'a str,
    /// Attempts made so far, the current one included.
    pub attempt: u32,
    pub last_failure: Option<E>,
    pub next_delay: Duration,
}

impl<'a, E> RetryContext<'a, E> {
    pub fn new(operation: &'a str) -> Self {
        Self {
            operation,
            attempt: 0,
            last_failure: None,
            next_delay: Duration::ZERO,
        }
    }

    fn record_failure(&mut self, failure: E, delay: Duration) {
        self.last_failure = Some(failure);
        self.next_delay = delay;
    }
}

/// Bounded exponential-backoff retry wrapper.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Run `call` until it succeeds, fails with an error `should_retry` rejects,
    /// or `max_attempts` calls have been made.
    pub async fn run<T, E, P, F, Fut>(
        &self,
        operation: &str,
        should_retry: P,
        mut call: F,
    ) -> Result<T, E>
    where
        E: Display,
        P: Fn(&E) -> bool,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let max_attempts = self.config.max_attempts.max(1);
        let mut ctx = RetryContext::new(operation);

        loop {
            ctx.attempt += 1;

            let err = match call().await {
                Ok(value) => {
                    if let Some(last) = &ctx.last_failure {
                        tracing::info!(
                            operation = ctx.operation,
                            attempts = ctx.attempt,
                            last_failure = %last,
                            "Upstream call succeeded after retry"
                        );
                    }
                    return Ok(value);
                }
                Err(err) => err,
            };

            if !should_retry(&err) {
                return Err(err);
            }

            if ctx.attempt >= max_attempts {
                tracing::warn!(
                    operation = ctx.operation,
                    attempts = ctx.attempt,
                    error = %err,
                    "Retry attempts exhausted"
                );
                return Err(err);
            }

            let delay = calculate_backoff(ctx.attempt, &self.config);
            tracing::warn!(
                operation = ctx.operation,
                attempt = ctx.attempt,
                delay = ?delay,
                error = %err,
                "Retrying upstream call"
            );
            metrics::record_retry(ctx.operation);
            ctx.record_failure(err, delay);

            tokio::time::sleep(ctx.next_delay).await;
        }
    }
}
