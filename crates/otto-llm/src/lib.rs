//! Otto LLM client
//!
//! Provides the abstraction and implementation for the hosted chat-completion
//! provider. The ChatModel trait defines a contract for sending a single
//! prompt-plus-system-prompt request and getting back the model's text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A single-turn chat-completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub messages: Vec<Message>,
}

/// Errors that can occur talking to the model provider
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key was configured for the provider
    #[error("API key is not configured")]
    MissingCredentials,

    /// The provider rejected the request
    #[error("Model API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure
    #[error("HTTP request error: {0}")]
    Http(String),

    /// The response carried no text content
    #[error("Model returned no text content")]
    EmptyResponse,
}

/// Result type for model operations
pub type LlmResult<T> = Result<T, LlmError>;

/// Interface to the chat-completion provider
#[async_trait]
pub trait ChatModel: Send + Sync + Debug {
    /// Send a request and return the first text block of the response,
    /// unmodified.
    async fn complete(&self, request: ChatRequest) -> LlmResult<String>;
}

pub mod anthropic;
pub mod extract;

pub use anthropic::AnthropicClient;
pub use extract::extract_json_object;
