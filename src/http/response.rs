//! Mapping of operation failures to HTTP responses.
//!
//! - NotFound → 404
//! - Validation → 400 with field-level messages
//! - everything else → 500, keeping the original message

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::employee::ServiceError;

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<&'static str, &'static str>>,
}

impl ErrorBody {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: status.as_u16(),
            errors: None,
        }
    }
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::RateLimited(_)
            | ServiceError::UpstreamUnavailable { .. }
            | ServiceError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ServiceError::Validation(errors) => {
                tracing::warn!(errors = %errors, "Rejected invalid request");
                ErrorBody {
                    message: "Validation failed".to_string(),
                    status: status.as_u16(),
                    errors: Some(
                        errors
                            .errors()
                            .iter()
                            .map(|e| (e.field, e.message))
                            .collect(),
                    ),
                }
            }
            ServiceError::NotFound(message) => {
                tracing::debug!(message = %message, "Resource not found");
                ErrorBody::new(status, message.clone())
            }
            other => {
                tracing::error!(error = %other, "Upstream operation failed");
                ErrorBody::new(status, other.to_string())
            }
        };
        (status, Json(body)).into_response()
    }
}

/// 400 response for a request body that is not valid JSON for the endpoint.
pub fn bad_json(rejection: JsonRejection) -> Response {
    tracing::warn!(error = %rejection.body_text(), "Malformed request body");
    let status = StatusCode::BAD_REQUEST;
    (status, Json(ErrorBody::new(status, rejection.body_text()))).into_response()
}
