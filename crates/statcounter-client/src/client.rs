//! HTTP transport for the API.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use statcounter_types::Credentials;

use crate::error::StatCounterError;
use crate::query::QueryParams;
use crate::url::{BASE_URL, signed_url};

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API service.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout, separate from the request timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("statcounter/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Client for the StatCounter API.
///
/// Holds the immutable account credentials and a pooled HTTP client. Every
/// public operation performs exactly one GET round trip; the assembled query
/// is a call-local value, so one client is safe to share across tasks.
#[derive(Debug, Clone)]
pub struct StatCounterClient {
    http: Client,
    credentials: Credentials,
    config: ClientConfig,
}

impl StatCounterClient {
    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(credentials: Credentials) -> Result<Self, reqwest::Error> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Creates a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self {
            http,
            credentials,
            config,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues one signed GET against an endpoint and returns the body.
    pub(crate) async fn get_xml(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<String, StatCounterError> {
        let url = signed_url(
            &self.config.base_url,
            endpoint,
            &self.credentials,
            params,
            Utc::now().timestamp(),
        );
        tracing::debug!(endpoint, "requesting StatCounter endpoint");
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
