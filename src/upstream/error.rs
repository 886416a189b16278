//! Transport-level failures of a single upstream exchange.

use std::time::Duration;

use thiserror::Error;

use crate::resilience::Phase;

/// Longest upstream error body kept for diagnostics.
const MAX_BODY_CHARS: usize = 512;

/// Errors produced by [`UpstreamClient::send`](crate::upstream::UpstreamClient::send).
#[derive(Debug, Error)]
pub enum TransportError {
    /// Client construction or URL building failed.
    #[error("upstream client setup failed: {0}")]
    Setup(String),

    /// Connection could not be established.
    #[error("upstream connection failed: {0}")]
    Connect(String),

    /// A deadline elapsed.
    #[error("upstream {phase} timeout after {after:?}")]
    Timeout { phase: Phase, after: Duration },

    /// Upstream answered with a non-2xx status.
    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Any other request failure.
    #[error("upstream request failed: {0}")]
    Request(String),
}

impl TransportError {
    /// HTTP status observed, if the upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn status_with_body(status: u16, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        let body = if text.chars().count() > MAX_BODY_CHARS {
            let truncated: String = text.chars().take(MAX_BODY_CHARS).collect();
            format!("{}...", truncated)
        } else {
            text.into_owned()
        };
        TransportError::Status { status, body }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            let phase = if e.is_connect() {
                Phase::Connect
            } else {
                Phase::Read
            };
            // reqwest does not report the configured limit
            TransportError::Timeout {
                phase,
                after: Duration::ZERO,
            }
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else if e.is_builder() {
            TransportError::Setup(e.to_string())
        } else {
            TransportError::Request(e.to_string())
        }
    }
}
