//! Tavily search provider.

use agent_core::{async_trait, AgentError, SearchProvider};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::api_types::TavilySearchRequest;

/// Search provider backed by the Tavily API.
pub struct TavilySearch {
    client: Client,
    api_url: String,
    api_key: String,
    max_results: u32,
}

impl TavilySearch {
    /// Create a new Tavily search provider.
    pub fn new(
        client: Client,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        max_results: u32,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
            max_results,
        }
    }
}

#[async_trait]
impl SearchProvider for TavilySearch {
    async fn search(&self, query: &str) -> Result<Value, AgentError> {
        let url = format!("{}/search", self.api_url);

        let request = TavilySearchRequest {
            api_key: self.api_key.clone(),
            query: query.to_string(),
            max_results: self.max_results,
        };

        debug!(query, "Sending request to Tavily API");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AgentError::Network(format!("Failed to send search request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AgentError::Api(format!(
                "Search API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AgentError::Api(format!("Failed to parse search response: {}", e)))?;

        // Tavily wraps result items in a `results` field. Pass whatever is
        // there through; the formatter handles non-array payloads.
        Ok(match body.get("results") {
            Some(results) => results.clone(),
            None => body,
        })
    }
}
