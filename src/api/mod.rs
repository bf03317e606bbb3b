//! HTTP API module for the environment-info and health endpoints.

pub mod handlers;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use types::{EnvironmentInfo, FeatureFlags, HealthStatus, RuntimeSettings};
