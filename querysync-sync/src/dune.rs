//! HTTP client for the Dune query API.
//!
//! `PATCH {base}/api/v1/query/{id}` with the API key in `X-DUNE-API-KEY` and
//! a `{"query_sql": ...}` body. The response echoes `{"query_id": N}`.

use std::time::Duration;

use serde::Deserialize;

use querysync_core::QueryId;

use crate::client::{QueryClient, QueryUpdate};
use crate::error::{ConfigError, SubmitError};

pub const DEFAULT_BASE_URL: &str = "https://api.dune.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_HEADER: &str = "X-DUNE-API-KEY";

/// Settings used to build a [`DuneClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Deserialize)]
struct UpdateQueryResponse {
    query_id: u64,
}

/// Blocking client for the query service.
pub struct DuneClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for DuneClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DuneClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DuneClient {
    /// Validate `config` and build the client.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let api_key = config
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        // Header values must be visible ASCII; anything else would only fail
        // per request, with the key echoed in the transport error.
        if !api_key.chars().all(|c| c.is_ascii_graphic()) {
            return Err(ConfigError::InvalidApiKey);
        }
        if config.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(config.base_url));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(concat!("querysync/", env!("CARGO_PKG_VERSION")))
            .build();

        Ok(Self {
            agent,
            base_url,
            api_key,
        })
    }

    /// Error text ends up in logs and reports; the key must never appear in it.
    fn redact(&self, text: &str) -> String {
        text.replace(&self.api_key, "***")
    }

    fn query_url(&self, query_id: QueryId) -> String {
        format!("{}/api/v1/query/{query_id}", self.base_url)
    }
}

impl QueryClient for DuneClient {
    fn update_query(
        &self,
        query_id: QueryId,
        update: &QueryUpdate<'_>,
    ) -> Result<QueryId, SubmitError> {
        let url = self.query_url(query_id);
        tracing::debug!("PATCH {url}");

        let response = self
            .agent
            .request("PATCH", &url)
            .set(API_KEY_HEADER, &self.api_key)
            .send_json(update);

        match response {
            Ok(response) => {
                let body: UpdateQueryResponse = response
                    .into_json()
                    .map_err(|e| SubmitError::Decode(self.redact(&e.to_string())))?;
                Ok(QueryId(body.query_id))
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response
                    .into_string()
                    .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
                Err(SubmitError::Api {
                    status,
                    body: self.redact(&body),
                })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(SubmitError::Transport(self.redact(&transport.to_string())))
            }
        }
    }
}
