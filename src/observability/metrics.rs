//! Metrics collection and exposition.
//!
//! # Metrics
//! - `service_requests_total` (counter): total requests by method
//! - `service_request_duration_seconds` (histogram): handler latency by method
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    metrics::describe_counter!("service_requests_total", "Total requests handled");
    metrics::describe_histogram!(
        "service_request_duration_seconds",
        metrics::Unit::Seconds,
        "Request handling latency"
    );

    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one handled request.
pub fn record_request(method: &str, started: Instant) {
    let method = method.to_string();
    metrics::counter!("service_requests_total", "method" => method.clone()).increment(1);
    metrics::histogram!("service_request_duration_seconds", "method" => method)
        .record(started.elapsed().as_secs_f64());
}
