//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Logical operation (fetch-all, fetch-by-id, delete):
//!     → retries.rs (RetryPolicy::run, retry only rate-limited failures)
//!         → upstream client call
//!             → timeouts.rs (connect / dispatch / read deadlines)
//!     → On retryable failure: backoff.rs (exponential delay + jitter), try again
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every upstream call has a deadline
//! - Retry is an explicit wrapper, never hidden inside the client
//! - Create is never retried (non-idempotent)

pub mod backoff;
pub mod retries;
pub mod timeouts;

pub use retries::{RetryContext, RetryPolicy};
pub use timeouts::{with_deadline, Phase};
