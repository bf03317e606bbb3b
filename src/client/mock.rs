//! Mock environment source for unit testing.
//!
//! This module provides a source that can be used in tests
//! without making real network requests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::Value;

use super::source::EnvSource;
use crate::error::FetchError;

/// Configuration for mock source behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Body to resolve with.
    pub body: Value,
    /// Fail with this detail instead of resolving.
    pub failure: Option<String>,
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
}

/// Mock source for testing. Clones share the call counter.
#[derive(Debug, Clone)]
pub struct MockEnvSource {
    /// Mock configuration.
    config: MockConfig,
    /// Number of fetches issued.
    calls: Arc<AtomicUsize>,
}

impl MockEnvSource {
    /// Create a mock source with custom configuration.
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Source that resolves with `body`.
    pub fn resolving(body: Value) -> Self {
        Self::with_config(MockConfig {
            body,
            ..MockConfig::default()
        })
    }

    /// Source that fails as a network error would.
    pub fn failing(detail: &str) -> Self {
        Self::with_config(MockConfig {
            failure: Some(detail.to_string()),
            ..MockConfig::default()
        })
    }

    /// Number of fetches issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EnvSource for MockEnvSource {
    async fn fetch_env(&self) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.config.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        match &self.config.failure {
            Some(detail) => Err(FetchError::Simulated(detail.clone())),
            None => Ok(self.config.body.clone()),
        }
    }
}
