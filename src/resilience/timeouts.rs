//! Timeout enforcement.
//!
//! # Responsibilities
//! - Wrap upstream futures with a deadline
//! - Report which phase of the exchange timed out
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Timeout errors are distinct from other transport errors

use std::future::Future;
use std::time::Duration;

use crate::upstream::TransportError;

/// Phase of an upstream exchange a deadline applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Connect,
    /// Writing the request and waiting for response headers.
    Dispatch,
    /// Reading the response body.
    Read,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Connect => write!(f, "connect"),
            Phase::Dispatch => write!(f, "dispatch"),
            Phase::Read => write!(f, "read"),
        }
    }
}

/// Await `fut`, failing with [`TransportError::Timeout`] once `limit` elapses.
pub async fn with_deadline<T, F>(phase: Phase, limit: Duration, fut: F) -> Result<T, TransportError>
where
    F: Future<Output = Result<T, TransportError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(TransportError::Timeout {
            phase,
            after: limit,
        }),
    }
}
