//! Anthropic Messages API implementation of ChatModel
//!
//! This module provides integration with the hosted Anthropic API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

use crate::{ChatModel, ChatRequest, LlmError, LlmResult};

/// Default base URL for the Anthropic API
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com";

/// API version header value required by the Messages API
const API_VERSION: &str = "2023-06-01";

/// Anthropic Messages API implementation of ChatModel
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    /// API key; absent keys fail at call time so the server can boot without one
    api_key: Option<String>,

    /// Base URL for the API
    api_base_url: String,

    /// HTTP client
    client: Client,
}

/// Response body of the Messages API, reduced to the fields we read
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl AnthropicClient {
    /// Create a new AnthropicClient against the production API
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_URL.to_string())
    }

    /// Create a new AnthropicClient against a specific base URL
    pub fn with_base_url(api_key: Option<String>, api_base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the URL of the messages endpoint
    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.api_base_url)
    }
}

#[async_trait]
impl ChatModel for AnthropicClient {
    async fn complete(&self, request: ChatRequest) -> LlmResult<String> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingCredentials)?;

        debug!(model = %request.model, "Sending messages request");

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            // The API reports failures as {"error": {"message": ...}}
            let message = serde_json::from_str::<Value>(&error_body)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                .unwrap_or(error_body);
            error!(status = %status, %message, "Messages request failed");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Http(e.to_string()))?;

        body.content
            .into_iter()
            .find(|block| block.kind == "text")
            .map(|block| block.text)
            .ok_or(LlmError::EmptyResponse)
    }
}
