//! Prometheus metrics for API traffic and client fetch outcomes.
//!
//! Recording through the `metrics` macros is a no-op until a recorder is
//! installed, so handlers and the client record unconditionally.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::error::AppError;

// === Metric Name Constants ===

/// API requests counter metric name, labelled by `route`.
pub const METRIC_API_REQUESTS: &str = "api_requests_total";
/// Client fetches counter metric name, labelled by `outcome`.
pub const METRIC_CLIENT_FETCHES: &str = "client_fetch_total";
/// Client fetch latency metric name.
pub const METRIC_CLIENT_FETCH_LATENCY: &str = "client_fetch_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(METRIC_API_REQUESTS, "Total number of API requests served");
    describe_counter!(
        METRIC_CLIENT_FETCHES,
        "Total number of client view fetches by outcome"
    );
    describe_histogram!(
        METRIC_CLIENT_FETCH_LATENCY,
        "Client view fetch latency in milliseconds"
    );

    debug!("Metrics descriptions registered");
}

/// Install the global Prometheus recorder and return its render handle.
pub fn install_prometheus() -> Result<PrometheusHandle, AppError> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| AppError::Metrics(e.to_string()))
}

/// Count one request to an API route.
pub fn record_api_request(route: &'static str) {
    counter!(METRIC_API_REQUESTS, "route" => route).increment(1);
}

/// Count one client fetch and record how long it took.
pub fn record_client_fetch(outcome: &'static str, started: Instant) {
    counter!(METRIC_CLIENT_FETCHES, "outcome" => outcome).increment(1);
    histogram!(METRIC_CLIENT_FETCH_LATENCY).record(started.elapsed().as_secs_f64() * 1000.0);
}
