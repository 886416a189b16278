//! HTTP client for the upstream employee-data API.
//!
//! # Responsibilities
//! - Build request URLs from the configured base URL
//! - Apply connect, dispatch and read deadlines
//! - Surface raw success or a typed [`TransportError`]
//!
//! Exactly one network call per `send`; retries are layered on top.

use std::time::{Duration, Instant};

use bytes::Bytes;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use url::Url;

use crate::config::{TimeoutConfig, UpstreamConfig};
use crate::observability::metrics;
use crate::resilience::{with_deadline, Phase};
use crate::upstream::error::TransportError;

const TCP_KEEPALIVE: Duration = Duration::from_secs(60);

/// Successful (2xx) upstream answer.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Upstream API client. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: Url,
    timeouts: TimeoutConfig,
}

impl UpstreamClient {
    /// Create a new upstream client.
    pub fn new(upstream: &UpstreamConfig, timeouts: &TimeoutConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&upstream.base_url).map_err(|e| {
            TransportError::Setup(format!("invalid base URL '{}': {}", upstream.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::Setup(format!(
                "base URL '{}' cannot carry a path",
                upstream.base_url
            )));
        }

        let http = Client::builder()
            .connect_timeout(timeouts.connect())
            .read_timeout(timeouts.read())
            .tcp_keepalive(TCP_KEEPALIVE)
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            timeouts: timeouts.clone(),
        })
    }

    /// Full URL for `segments` appended to the base URL. Segments are percent-encoded.
    ///
    /// `.` and `..` are rejected; the url crate would resolve them as dot-segments.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, TransportError> {
        if let Some(dot) = segments.iter().find(|s| is_dot_segment(s)) {
            return Err(TransportError::Request(format!(
                "path segment '{}' is not a literal value",
                dot
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TransportError::Setup("base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue a single request, failing on transport errors and non-2xx statuses.
    pub async fn send<B>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<RawResponse, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        let start = Instant::now();
        let method_label = method.to_string();

        tracing::debug!(method = %method, url = %url, "Calling upstream");

        let result = self.exchange(method, url, body).await;

        let outcome = match &result {
            Ok(_) => "success".to_string(),
            Err(TransportError::Status { status, .. }) => status.to_string(),
            Err(TransportError::Timeout { .. }) => "timeout".to_string(),
            Err(_) => "error".to_string(),
        };
        metrics::record_upstream_call(&method_label, &outcome, start);

        if let Err(e) = &result {
            tracing::debug!(method = %method_label, error = %e, "Upstream call failed");
        }
        result
    }

    async fn exchange<B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<RawResponse, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = with_deadline(Phase::Dispatch, self.timeouts.dispatch(), async {
            request.send().await.map_err(TransportError::from)
        })
        .await?;

        let status = response.status();
        let body = with_deadline(Phase::Read, self.timeouts.read(), async {
            response.bytes().await.map_err(TransportError::from)
        })
        .await?;

        if !status.is_success() {
            return Err(TransportError::status_with_body(status.as_u16(), &body));
        }

        Ok(RawResponse { status, body })
    }
}

/// True for path segments the url crate resolves instead of encoding.
pub fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeouts", &self.timeouts)
            .finish()
    }
}
