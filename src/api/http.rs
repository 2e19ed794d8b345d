//! HTTP analysis backend (reqwest)

use crate::api::{status_error, AnalysisApi, StreetsResponse};
use crate::config::BackendConfig;
use crate::constants::api::{ANALYZE_PATH, STREETS_PATH};
use crate::error::{Error, Result};
use crate::model::{SearchQuery, StreetName};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("tama-map/", env!("CARGO_PKG_VERSION"));

/// Client for a running analysis backend
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for `base_url` (scheme and host, no trailing path)
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::InvalidUrl(base_url.to_string()));
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the `[backend]` config section
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Read a response, turning non-success statuses into [`Error::Status`]
    async fn read_json(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl AnalysisApi for HttpBackend {
    async fn streets(&self) -> Result<Vec<StreetName>> {
        let url = self.url(STREETS_PATH);
        debug!(%url, "Fetching street list");

        let response = self.client.get(&url).send().await?;
        let body = Self::read_json(response).await?;
        let parsed: StreetsResponse = serde_json::from_value(body)?;

        Ok(parsed.streets)
    }

    async fn analyze(&self, query: &SearchQuery) -> Result<Value> {
        let url = self.url(ANALYZE_PATH);
        debug!(
            %url,
            street = %query.street,
            house_number = %query.house_number,
            "Submitting analysis"
        );

        let response = self.client.post(&url).json(query).send().await?;
        Self::read_json(response).await
    }
}
