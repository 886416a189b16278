//! Failures surfaced by the employee operations.

use thiserror::Error;

use crate::employee::validation::ValidationErrors;
use crate::upstream::{DecodeError, TransportError};

/// Typed failure of a public employee operation.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// Create payload rejected before any upstream call.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Upstream has no such employee.
    #[error("{0}")]
    NotFound(String),

    /// Upstream kept answering 429 until retries ran out.
    #[error("Upstream rate limit exceeded: {0}")]
    RateLimited(String),

    /// Transport failure, timeout or any other error status.
    #[error("{message}")]
    UpstreamUnavailable { status: Option<u16>, message: String },

    /// Upstream payload was malformed.
    #[error("{0}")]
    Decode(String),
}

/// Result type for employee operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ServiceError::RateLimited(_))
    }

    pub(crate) fn unavailable(message: impl Into<String>) -> Self {
        ServiceError::UpstreamUnavailable {
            status: None,
            message: message.into(),
        }
    }
}

impl From<TransportError> for ServiceError {
    fn from(err: TransportError) -> Self {
        match err.status() {
            Some(429) => ServiceError::RateLimited(err.to_string()),
            Some(404) => ServiceError::NotFound(err.to_string()),
            status => ServiceError::UpstreamUnavailable {
                status,
                message: err.to_string(),
            },
        }
    }
}

impl From<DecodeError> for ServiceError {
    fn from(err: DecodeError) -> Self {
        ServiceError::Decode(err.to_string())
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(errors)
    }
}
