//! Notion REST API client with connection pooling.

use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use serde_json::{Value, json};

use super::constants;

/// Client for the external store. Cheap to clone; the pooled HTTP client is
/// shared across clones.
#[derive(Clone)]
pub struct NotionClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

/// Outcome of a create-record call that reached the external store.
/// Transport failures never produce one of these; they surface as errors.
#[derive(Debug, Clone)]
pub struct RecordResult {
    /// HTTP status returned by the store
    pub status: u16,
    /// Response body, verbatim; `Null` when the body was not JSON
    pub body: Value,
}

impl RecordResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl NotionClient {
    pub fn new(api_key: String, timeout_secs: u64) -> Self {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("intake-cli/0.1")
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            api_key,
            base_url: constants::API_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host. Used by integration tests to
    /// target a local mock of the external store.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create one record in the given database. HTTP-level rejections come
    /// back in the result so callers can pass the upstream status and body
    /// through; only transport failures are errors.
    pub async fn create_record(&self, database_id: &str, properties: Value) -> Result<RecordResult> {
        let url = constants::pages_endpoint(&self.base_url);
        let payload = json!({
            "parent": { "database_id": database_id },
            "properties": properties,
        });

        debug!("Creating record in database {}", database_id);

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header(constants::headers::NOTION_VERSION, constants::NOTION_VERSION)
            .json(&payload)
            .send()
            .await
            .context("Create-record request failed")?;

        let status = response.status().as_u16();
        debug!("Create-record response status: {}", status);

        let body: Value = response.json().await.unwrap_or(Value::Null);
        Ok(RecordResult { status, body })
    }
}
