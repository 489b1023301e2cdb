use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use super::{Tool, ToolError};

const SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Returned in place of result lines when the search comes back empty.
/// An empty result set is a normal outcome, not an error.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Configuration for the Google Custom Search client
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Developer API key (from GOOGLE_API_KEY env var)
    pub api_key: String,
    /// Programmable search engine ID (from GOOGLE_CSE_ID env var)
    pub engine_id: String,
    /// Results requested per query (the API caps this at 10)
    pub max_results: u8,
}

impl SearchConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .context("GOOGLE_API_KEY environment variable not set")?;
        let engine_id = std::env::var("GOOGLE_CSE_ID")
            .context("GOOGLE_CSE_ID environment variable not set")?;

        Ok(Self {
            api_key,
            engine_id,
            max_results: 10,
        })
    }
}

/// Failure modes of the search capability
///
/// Absence of results is not represented here; it maps to
/// [`NO_RESULTS_MESSAGE`] instead.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("search API error: {status} - {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Web search tool backed by the Google Custom Search JSON API
pub struct GoogleSearchTool {
    client: Client,
    config: SearchConfig,
}

impl GoogleSearchTool {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Run a search query and render the results as "{title}: {link}" lines
    pub async fn search(&self, query: &str) -> Result<String, SearchError> {
        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.engine_id.as_str()),
                ("q", query),
                ("num", &self.config.max_results.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Api { status, body });
        }

        let response: SearchResponse = response.json().await?;
        Ok(format_results(&response.items.unwrap_or_default()))
    }
}

#[async_trait]
impl Tool for GoogleSearchTool {
    fn name(&self) -> &str {
        "search"
    }

    fn description(&self) -> &str {
        "For when you need to search for something."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                }
            },
            "required": ["query"]
        })
    }

    async fn call(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let query = input
            .get("query")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| {
                ToolError::InvalidInput("expected a \"query\" string field".to_string())
            })?;

        Ok(self.search(query).await?)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    title: String,
    link: String,
}

fn format_results(items: &[SearchItem]) -> String {
    if items.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    items
        .iter()
        .map(|item| format!("{}: {}", item.title, item.link))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_results() {
        let response: SearchResponse = serde_json::from_str(
            r#"{
                "items": [
                    {"title": "EV Dataset", "link": "https://example.com/ev", "snippet": "ignored"},
                    {"title": "Battery Models", "link": "https://example.com/battery"}
                ]
            }"#,
        )
        .unwrap();

        let formatted = format_results(&response.items.unwrap());
        assert_eq!(
            formatted,
            "EV Dataset: https://example.com/ev\nBattery Models: https://example.com/battery"
        );
    }

    #[test]
    fn test_empty_results_substitute_message() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(
            format_results(&response.items.unwrap_or_default()),
            NO_RESULTS_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_call_rejects_missing_query() {
        let tool = GoogleSearchTool::new(SearchConfig {
            api_key: "key".to_string(),
            engine_id: "cx".to_string(),
            max_results: 10,
        });

        let result = tool.call(&json!({"q": "wrong field"})).await;
        assert!(matches!(result, Err(ToolError::InvalidInput(_))));
    }

    // Requires real API credentials; ignored by default
    #[tokio::test]
    #[ignore]
    async fn test_live_search() {
        let config = SearchConfig::from_env().expect("search credentials required");
        let tool = GoogleSearchTool::new(config);

        let results = tool.search("rust programming language").await.unwrap();
        assert!(!results.is_empty());
    }
}
