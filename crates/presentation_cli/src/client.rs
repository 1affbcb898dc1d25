//! Thin client for the server's session API

use anyhow::{Context, bail};
use reqwest::{Client, Response};
use serde_json::{Value, json};
use tracing::debug;

/// Session API client bound to one server
#[derive(Debug, Clone)]
pub struct ExplorerApi {
    client: Client,
    base_url: String,
}

impl ExplorerApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Turn an error response into its `error (code)` message
    async fn into_json(response: Response) -> anyhow::Result<Value> {
        let status = response.status();
        let body: Value = response
            .json()
            .await
            .with_context(|| format!("unreadable response (HTTP {status})"))?;

        if status.is_success() {
            return Ok(body);
        }

        let message = body["error"].as_str().unwrap_or("request failed");
        let code = body["code"].as_str().unwrap_or("unknown");
        bail!("{message} ({code}, HTTP {status})")
    }

    pub async fn create_session(&self) -> anyhow::Result<Value> {
        debug!("Opening session");
        let response = self.client.post(self.url("/v1/sessions")).send().await?;
        Self::into_json(response).await
    }

    pub async fn search(&self, session_id: &str, query: &str) -> anyhow::Result<Value> {
        debug!(session_id, query, "Searching");
        let response = self
            .client
            .post(self.url(&format!("/v1/sessions/{session_id}/search")))
            .json(&json!({ "query": query }))
            .send()
            .await?;
        Self::into_json(response).await
    }

    pub async fn next_holidays(&self, session_id: &str) -> anyhow::Result<Value> {
        let response = self
            .client
            .post(self.url(&format!("/v1/sessions/{session_id}/holidays/next")))
            .send()
            .await?;
        Self::into_json(response).await
    }

    /// Close a session; failures are only logged
    pub async fn close_session(&self, session_id: &str) {
        let result = self
            .client
            .delete(self.url(&format!("/v1/sessions/{session_id}")))
            .send()
            .await;
        match result {
            Ok(response) if response.status().is_success() => {
                debug!(session_id, "Session closed");
            },
            Ok(response) => debug!(status = %response.status(), "Session close refused"),
            Err(e) => debug!(error = %e, "Session close failed"),
        }
    }

    /// Status of the readiness probe
    pub async fn ready(&self) -> reqwest::Result<reqwest::StatusCode> {
        Ok(self.client.get(self.url("/ready")).send().await?.status())
    }
}
