//! Decoding of `{status, data}` upstream envelopes.
//!
//! # Responsibilities
//! - Unwrap the envelope around every upstream payload
//! - Report absent or null `data` as "no data", not as an error
//! - Fail with [`DecodeError`] only when the payload is malformed
//!
//! Field aliasing lives on the domain types (`#[serde(alias = ...)]`), so one
//! generic function serves every payload shape.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Wire shape wrapping every upstream response.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub status: Option<String>,
    pub data: Option<T>,
}

/// Upstream payload could not be decoded.
#[derive(Debug, Error)]
#[error("malformed upstream payload: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Decode an envelope body into its payload.
///
/// Returns `Ok(None)` for an empty body, a missing `data` field or `data: null`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, DecodeError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let envelope: Option<Envelope<T>> = serde_json::from_slice(body)?;
    Ok(envelope.and_then(|e| e.data))
}
