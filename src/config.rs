//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::AppError;

/// Deployment label reported when neither `APP_ENV` nor `NODE_ENV` is set.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface to bind.
    #[serde(default = "default_bind_host")]
    pub bind_host: String,

    /// Deployment label, preferred over `node_env`.
    #[serde(default)]
    pub app_env: Option<String>,

    /// Deployment label under its Node-style name.
    #[serde(default)]
    pub node_env: Option<String>,

    /// Pre-built client bundle. Enables the static fallback when set.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,

    /// Serve a Prometheus exposition at `/metrics`.
    #[serde(default)]
    pub metrics_enabled: bool,

    // === Client Configuration ===
    /// Base URL the client view fetches from.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub log_json: bool,
}

fn default_port() -> u16 {
    8981
}

fn default_bind_host() -> String {
    "0.0.0.0".to_string()
}

fn default_api_base_url() -> String {
    "http://localhost:8981".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_host: default_bind_host(),
            app_env: None,
            node_env: None,
            static_dir: None,
            metrics_enabled: false,
            api_base_url: default_api_base_url(),
            rust_log: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Resolve configuration from an explicit set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        envy::from_iter(vars.into_iter().map(|(k, v)| (k.into(), v.into())))
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), AppError> {
        self.socket_addr()?;

        url::Url::parse(&self.api_base_url).map_err(|e| {
            AppError::InvalidConfig(format!("API_BASE_URL is not a valid URL: {}", e))
        })?;

        if let Some(dir) = &self.static_dir {
            if !dir.is_dir() {
                return Err(AppError::InvalidConfig(format!(
                    "STATIC_DIR {} is not a directory",
                    dir.display()
                )));
            }
        }

        Ok(())
    }

    /// Effective deployment label. Empty values count as unset.
    pub fn environment(&self) -> &str {
        [&self.app_env, &self.node_env]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|label| !label.is_empty())
            .unwrap_or(DEFAULT_ENVIRONMENT)
    }

    /// Address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        let ip: IpAddr = self.bind_host.parse().map_err(|_| {
            AppError::InvalidConfig(format!("BIND_HOST {} is not an IP address", self.bind_host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let config = Config::from_vars(Vec::<(String, String)>::new()).unwrap();

        assert_eq!(config.port, 8981);
        assert_eq!(config.environment(), "development");
        assert_eq!(config.api_base_url, "http://localhost:8981");
        assert!(config.static_dir.is_none());
        assert!(!config.metrics_enabled);
    }

    #[test]
    fn port_is_read_from_vars() {
        let config = Config::from_vars([("PORT", "3000")]).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        assert!(Config::from_vars([("PORT", "eighty")]).is_err());
    }

    #[test]
    fn app_env_takes_precedence_over_node_env() {
        let config =
            Config::from_vars([("APP_ENV", "staging"), ("NODE_ENV", "production")]).unwrap();
        assert_eq!(config.environment(), "staging");

        let config = Config::from_vars([("NODE_ENV", "production")]).unwrap();
        assert_eq!(config.environment(), "production");
    }

    #[test]
    fn empty_label_falls_back_to_default() {
        let config = Config::from_vars([("NODE_ENV", "")]).unwrap();
        assert_eq!(config.environment(), DEFAULT_ENVIRONMENT);
    }

    #[test]
    fn validate_rejects_bad_bind_host() {
        let config = Config {
            bind_host: "not-an-ip".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_missing_static_dir() {
        let config = Config {
            static_dir: Some(PathBuf::from("/definitely/not/here")),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }
}
