//! Payloads served by the info service.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Application name reported by `/api/env`.
pub const APP_NAME: &str = "Envinfo Demo";

/// Application version reported by `/api/env`.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Liveness literal reported by `/api/health`.
pub const HEALTH_UP: &str = "UP";

/// Application metadata returned by `GET /api/env`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentInfo {
    /// Constant application name.
    pub app_name: String,
    /// Constant application version.
    pub version: String,
    /// Deployment label.
    pub environment: String,
    /// ISO-8601 instant the payload was built.
    pub server_time: String,
    /// Build-time feature flags.
    pub features: FeatureFlags,
    /// Build-time settings.
    pub config: RuntimeSettings,
}

/// The fixed set of feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub feature_a: bool,
    pub feature_b: bool,
    pub feature_c: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            feature_a: true,
            feature_b: false,
            feature_c: true,
        }
    }
}

/// Settings block of [`EnvironmentInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeSettings {
    pub max_items: u32,
    pub cache_enabled: bool,
    /// Milliseconds.
    pub timeout: u64,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            max_items: 100,
            cache_enabled: true,
            timeout: 30_000,
        }
    }
}

impl EnvironmentInfo {
    /// Build the payload for one request.
    pub fn snapshot(environment: &str, now: DateTime<Utc>) -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            version: APP_VERSION.to_string(),
            environment: environment.to_string(),
            server_time: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            features: FeatureFlags::default(),
            config: RuntimeSettings::default(),
        }
    }
}

/// Liveness payload returned by `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    /// The only status this service reports.
    pub fn up() -> Self {
        Self {
            status: HEALTH_UP.to_string(),
        }
    }
}
