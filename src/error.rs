//! Unified error types for the info service and client view.

use thiserror::Error;

/// Unified error type for the crate.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Metrics recorder could not be installed.
    #[error("metrics error: {0}")]
    Metrics(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of a single environment-info fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request never produced a response (connection refused, DNS, reset).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// Body was not a JSON document.
    #[error("malformed body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Failure injected by [`MockEnvSource`](crate::client::MockEnvSource).
    #[error("simulated failure: {0}")]
    Simulated(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
