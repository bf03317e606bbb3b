//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use tracing::debug;

use super::types::{EnvironmentInfo, HealthStatus};
use crate::config::Config;
use crate::metrics::record_api_request;

/// Application state shared with handlers. Immutable after construction.
#[derive(Clone)]
pub struct AppState {
    /// Deployment label resolved at startup.
    pub environment: Arc<str>,
    /// Render handle of the installed Prometheus recorder.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create state reporting the given deployment label.
    pub fn new(environment: &str) -> Self {
        Self {
            environment: Arc::from(environment),
            metrics: None,
        }
    }

    /// Create state from resolved configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.environment())
    }

    /// Attach a Prometheus handle, enabling `/metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Environment info handler - always returns 200 with a fresh payload.
pub async fn env_info(State(state): State<AppState>) -> impl IntoResponse {
    record_api_request("/api/env");
    let info = EnvironmentInfo::snapshot(&state.environment, Utc::now());
    debug!(server_time = %info.server_time, "Serving environment info");
    Json(info)
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    record_api_request("/api/health");
    Json(HealthStatus::up())
}

/// Answer for paths under `/api` that match no route.
pub async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}

/// Prometheus text exposition.
pub async fn metrics_exposition(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}
