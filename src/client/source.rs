//! Where the client view gets its payload from.

use std::future::Future;

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::FetchError;

/// Path of the environment-info endpoint.
pub const ENV_PATH: &str = "/api/env";

/// One-shot provider of the environment-info document.
pub trait EnvSource {
    /// Fetch the document once. Implementations must not retry.
    fn fetch_env(&self) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// Fetches `/api/env` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpEnvSource {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Fully resolved endpoint URL.
    endpoint: Url,
}

impl HttpEnvSource {
    /// Create a source for the service rooted at `base_url`.
    ///
    /// No request timeout is configured; transport defaults apply.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("envinfo/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_client(http, base_url)
    }

    /// Create a source sharing an existing HTTP client.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, FetchError> {
        let endpoint = Url::parse(base_url)?.join(ENV_PATH)?;
        Ok(Self { http, endpoint })
    }

    /// Endpoint this source requests.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl EnvSource for HttpEnvSource {
    async fn fetch_env(&self) -> Result<Value, FetchError> {
        let response = self.http.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        debug!(endpoint = %self.endpoint, len = bytes.len(), "Received environment info");

        Ok(serde_json::from_slice(&bytes)?)
    }
}
