//! Exponential backoff with jitter.

use std::time::Duration;

use rand::Rng;

use crate::config::RetryConfig;

/// Exponential delay for the given attempt, capped at `max_delay_ms`, without jitter.
///
/// `attempt` counts failed attempts so far; attempt 1 waits `base_delay_ms`.
pub fn exponential_delay(attempt: u32, config: &RetryConfig) -> Duration {
    if attempt == 0 {
        return Duration::from_millis(0);
    }

    let exponent = i32::try_from(attempt - 1).unwrap_or(i32::MAX);
    let factor = config.multiplier.max(1.0).powi(exponent);
    let delay_ms = config.base_delay_ms as f64 * factor;
    let capped = delay_ms.min(config.max_delay_ms as f64);

    Duration::from_millis(capped as u64)
}

/// Calculate exponential backoff delay with jitter.
///
/// Jitter is additive: up to `jitter` times the capped delay is added on top.
pub fn calculate_backoff(attempt: u32, config: &RetryConfig) -> Duration {
    let capped = exponential_delay(attempt, config);
    let jitter_range = (capped.as_millis() as f64 * config.jitter.clamp(0.0, 1.0)) as u64;
    let jitter = if jitter_range > 0 {
        rand::thread_rng().gen_range(0..=jitter_range)
    } else {
        0
    };

    capped + Duration::from_millis(jitter)
}
