//! Integration tests for the info service and client view.
//!
//! Each test binds a real server on an ephemeral loopback port and talks to
//! it over HTTP.

use std::net::SocketAddr;

use axum::{http::StatusCode, routing::get, Router};
use envinfo::client::{ClientView, FetchPhase, FetchState, HttpEnvSource, FETCH_ERROR_MESSAGE};
use envinfo::config::Config;
use envinfo::server::{build_service, start, ServerHandle};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn loopback() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

/// Start the real service with the given variables.
async fn start_service(vars: &[(&str, &str)]) -> ServerHandle {
    let config = Config::from_vars(vars.iter().copied()).unwrap();
    start(build_service(&config, None), loopback()).await.unwrap()
}

fn base_url(handle: &ServerHandle) -> String {
    format!("http://{}", handle.addr())
}

#[tokio::test]
async fn env_reports_configured_environment() {
    let handle = start_service(&[("APP_ENV", "production")]).await;

    let body: Value = reqwest::get(format!("{}/api/env", base_url(&handle)))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["environment"], "production");
    assert_eq!(body["appName"], "Envinfo Demo");
    assert_eq!(body["config"]["maxItems"], 100);

    handle.shutdown().await;
}

#[tokio::test]
async fn health_is_exactly_up() {
    let handle = start_service(&[]).await;

    let response = reqwest::Client::new()
        .get(format!("{}/api/health?probe=1", base_url(&handle)))
        .body("{\"not\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), r#"{"status":"UP"}"#);

    handle.shutdown().await;
}

#[tokio::test]
async fn client_view_renders_live_payload() {
    let handle = start_service(&[]).await;

    let source = HttpEnvSource::new(&base_url(&handle)).unwrap();
    let mut view = ClientView::mount(source);
    assert_eq!(view.state(), &FetchState::Loading);

    view.activate().await;

    assert_eq!(view.state().phase(), FetchPhase::Success);
    let info = view.state().environment_info().unwrap();
    assert_eq!(info.environment, "development");
    assert_eq!(info.config.timeout, 30_000);

    let html = view.render();
    assert!(html.contains(r#""appName": "Envinfo Demo""#));
    assert!(!html.contains(FETCH_ERROR_MESSAGE));

    handle.shutdown().await;
}

#[tokio::test]
async fn client_view_errors_when_service_is_down() {
    let handle = start_service(&[]).await;
    let url = base_url(&handle);
    handle.shutdown().await;

    let mut view = ClientView::mount(HttpEnvSource::new(&url).unwrap());
    view.activate().await;

    assert_eq!(view.state(), &FetchState::Error(FETCH_ERROR_MESSAGE.to_string()));
}

#[tokio::test]
async fn client_view_errors_on_server_error_status() {
    let router = Router::new().route(
        "/api/env",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "{\"appName\":\"X\"}") }),
    );
    let handle = start(router, loopback()).await.unwrap();

    let mut view = ClientView::mount(HttpEnvSource::new(&base_url(&handle)).unwrap());
    view.activate().await;

    assert_eq!(view.state().phase(), FetchPhase::Error);

    handle.shutdown().await;
}

#[tokio::test]
async fn client_view_errors_on_malformed_body() {
    let router = Router::new().route("/api/env", get(|| async { "<html>not json</html>" }));
    let handle = start(router, loopback()).await.unwrap();

    let mut view = ClientView::mount(HttpEnvSource::new(&base_url(&handle)).unwrap());
    view.activate().await;

    assert_eq!(view.state().phase(), FetchPhase::Error);

    handle.shutdown().await;
}

#[tokio::test]
async fn static_variant_serves_fallback_for_page_routes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<!DOCTYPE html><div id=\"root\"></div>").unwrap();

    let static_dir = dir.path().to_string_lossy().to_string();
    let handle = start_service(&[("STATIC_DIR", static_dir.as_str())]).await;

    let response = reqwest::get(format!("{}/dashboard/42", base_url(&handle)))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response.text().await.unwrap().contains("<div id=\"root\">"));

    let response = reqwest::get(format!("{}/api/health", base_url(&handle)))
        .await
        .unwrap();
    assert_eq!(response.text().await.unwrap(), r#"{"status":"UP"}"#);

    handle.shutdown().await;
}
