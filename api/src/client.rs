use std::{sync::Mutex, time::Duration};

use raven_core::{RavenError, Result};
use reqwest::{redirect, Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{params::Params, types::is_success};

pub const API_BASE_URL: &str = "https://api.raventools.com/api";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

const MAX_REDIRECTS: usize = 10;

pub struct RavenClient {
    client: Client,
    api_key: String,
    base_url: Url,
    last_error: Mutex<Option<u16>>,
}

/// Optional settings for [`RavenClient`]; defaults match the hosted service
#[derive(Debug, Clone)]
pub struct RavenClientBuilder {
    api_key: String,
    base_url: String,
    connect_timeout: Duration,
    accept_invalid_certs: bool,
}

impl RavenClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Skip TLS certificate verification. Only for self-signed endpoints.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn build(self) -> Result<RavenClient> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| RavenError::Config(format!("invalid base URL {}: {}", self.base_url, e)))?;

        if self.accept_invalid_certs {
            warn!("TLS certificate verification disabled");
        }

        let client = Client::builder()
            .connect_timeout(self.connect_timeout)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .gzip(true)
            .build()
            .map_err(|e| RavenError::Config(e.to_string()))?;

        Ok(RavenClient {
            client,
            api_key: self.api_key,
            base_url,
            last_error: Mutex::new(None),
        })
    }
}

impl RavenClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> RavenClientBuilder {
        RavenClientBuilder {
            api_key: api_key.into(),
            base_url: API_BASE_URL.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Most recent non-200 status seen by this client, if any
    pub fn last_error(&self) -> Option<u16> {
        *self
            .last_error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record_error(&self, status: u16) {
        *self
            .last_error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(status);
    }

    /// Authenticated GET for one operation, decoding the JSON body.
    pub(crate) async fn get_data(&self, params: Params) -> Result<Value> {
        let operation = params.operation();
        debug!(method = %operation, "sending request");

        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[("key", self.api_key.as_str()), ("format", "json")])
            .query(params.pairs())
            .send()
            .await
            .map_err(|e| RavenError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            self.record_error(status.as_u16());
            warn!(method = %operation, status = status.as_u16(), "request failed");
            return Err(RavenError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| RavenError::Parse(e.without_url().to_string()))?;

        debug!(method = %operation, "response decoded");
        Ok(data)
    }

    /// Write operations: `true` when the service answers with the success sentinel.
    pub(crate) async fn write_data(&self, params: Params) -> Result<bool> {
        let operation = params.operation();
        if !operation.is_write() {
            return Err(RavenError::Config(format!(
                "{operation} does not answer with a success flag"
            )));
        }

        let data = self.get_data(params).await?;
        let accepted = is_success(&data);
        if !accepted {
            debug!(method = %operation, "write rejected");
        }
        Ok(accepted)
    }
}

impl std::fmt::Debug for RavenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RavenClient")
            .field("base_url", &self.base_url.as_str())
            .field("last_error", &self.last_error())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let client = RavenClient::new("secret").unwrap();
        assert_eq!(client.base_url().as_str(), API_BASE_URL);
        assert_eq!(client.api_key(), "secret");
        assert_eq!(client.last_error(), None);
    }

    #[test]
    fn rejects_bad_base_url() {
        let err = RavenClient::builder("secret")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, RavenError::Config(_)));
    }

    #[tokio::test]
    async fn write_data_refuses_read_operations() {
        let client = RavenClient::builder("secret")
            .base_url("http://127.0.0.1:1/api")
            .build()
            .unwrap();
        let err = client.write_data(crate::params::domains()).await.unwrap_err();
        assert!(matches!(err, RavenError::Config(_)));
        assert_eq!(client.last_error(), None);
    }

    #[test]
    fn debug_hides_key() {
        let client = RavenClient::new("secret").unwrap();
        assert!(!format!("{client:?}").contains("secret"));
    }
}
