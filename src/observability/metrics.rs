//! Metrics collection and exposition.
//!
//! # Metrics
//! - `flickr_proxy_requests_total` (counter): inbound requests by route, status
//! - `flickr_proxy_request_duration_seconds` (histogram): inbound latency
//! - `flickr_proxy_upstream_requests_total` (counter): upstream calls by method, outcome
//! - `flickr_proxy_upstream_duration_seconds` (histogram): upstream latency by method
//!
//! Recording is a no-op until `init_metrics` installs the Prometheus recorder.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its HTTP listener on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one inbound request.
pub fn record_request(route: &str, status: u16, start: Instant) {
    counter!(
        "flickr_proxy_requests_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("flickr_proxy_request_duration_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record one upstream call.
pub fn record_upstream_call(method: &'static str, success: bool, start: Instant) {
    let outcome = if success { "success" } else { "error" };
    counter!("flickr_proxy_upstream_requests_total", "method" => method, "outcome" => outcome)
        .increment(1);
    histogram!("flickr_proxy_upstream_duration_seconds", "method" => method)
        .record(start.elapsed().as_secs_f64());
}
