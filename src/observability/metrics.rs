//! Metrics collection and exposition.
//!
//! # Metrics
//! - `employee_proxy_requests_total` (counter): inbound requests by method, route, status
//! - `employee_proxy_request_duration_seconds` (histogram): inbound latency
//! - `employee_proxy_upstream_calls_total` (counter): upstream calls by method, outcome
//! - `employee_proxy_upstream_call_duration_seconds` (histogram): upstream latency
//! - `employee_proxy_upstream_retries_total` (counter): retries by operation
//!
//! Recording is a no-op until [`init_metrics`] installs the Prometheus recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    counter!(
        "employee_proxy_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "employee_proxy_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_upstream_call(method: &str, outcome: &str, start: Instant) {
    counter!(
        "employee_proxy_upstream_calls_total",
        "method" => method.to_string(),
        "outcome" => outcome.to_string()
    )
    .increment(1);
    histogram!(
        "employee_proxy_upstream_call_duration_seconds",
        "method" => method.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_retry(operation: &str) {
    counter!(
        "employee_proxy_upstream_retries_total",
        "operation" => operation.to_string()
    )
    .increment(1);
}
