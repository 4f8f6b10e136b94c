//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by status and format
//! - `gateway_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Labels are status code and output format; upstream detail stays in
//!   logs
//! - Exporter failures are logged, never fatal: the gateway serves traffic
//!   without metrics

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its HTTP scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics endpoint listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one terminal request outcome.
pub fn record_request(status: u16, format: &str, start: Instant) {
    let status = status.to_string();
    let format = format.to_string();

    metrics::counter!(
        "gateway_requests_total",
        "status" => status.clone(),
        "format" => format.clone()
    )
    .increment(1);

    metrics::histogram!(
        "gateway_request_duration_seconds",
        "status" => status,
        "format" => format
    )
    .record(start.elapsed().as_secs_f64());
}
