//! HTTP API route definitions.

use std::path::Path;

use axum::{
    extract::Request,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower::ServiceExt;
use tower_http::trace::TraceLayer;

use super::handlers::{api_not_found, env_info, health, metrics_exposition, AppState};

/// Whether `path` belongs to the API namespace.
fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Create the service router.
///
/// With `static_dir` set, anything the API routes do not match is served
/// from that directory, falling back to its `index.html`.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api_routes = Router::new()
        .route("/env", get(env_info))
        .route("/health", get(health))
        .fallback(api_not_found);

    let mut router = Router::new().nest("/api", api_routes);

    if state.metrics.is_some() {
        router = router.route("/metrics", get(metrics_exposition));
    }

    let router = match static_dir {
        Some(dir) => {
            let serve_dir = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
            router.fallback(move |request: Request| {
                let serve_dir = serve_dir.clone();
                async move {
                    // The nested fallback misses `/api/` itself; keep it out of the bundle.
                    if is_api_path(request.uri().path()) {
                        return api_not_found().await.into_response();
                    }
                    match serve_dir.oneshot(request).await {
                        Ok(response) => response.into_response(),
                        Err(never) => match never {},
                    }
                }
            })
        }
        None => router,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
