//! Configuration for the Otto Server
//!
//! This module contains the configuration types and loading functionality.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

use crate::error::ServerResult;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host to bind to
    #[serde(default = "default_host")]
    pub bind_address: String,

    /// API key for the chat-completion provider
    #[serde(default)]
    pub anthropic_api_key: Option<String>,

    /// Base URL of the chat-completion provider API
    #[serde(default = "default_model_api_url")]
    pub model_api_url: String,

    /// Base URL of the LaTeX compile service
    #[serde(default = "default_latex_service_url")]
    pub latex_service_url: String,

    /// Model used for the assistant and evaluate endpoints
    #[serde(default = "default_assistant_model")]
    pub assistant_model: String,

    /// Model used for document generation
    #[serde(default = "default_document_model")]
    pub document_model: String,

    /// Origins allowed by the CORS layer
    #[serde(default = "default_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_model_api_url() -> String {
    otto_llm::anthropic::DEFAULT_API_URL.to_string()
}

fn default_latex_service_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_assistant_model() -> String {
    "claude-3-5-sonnet-20240620".to_string()
}

fn default_document_model() -> String {
    "claude-3-7-sonnet-20250219".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    // The development front end runs on port 3000
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn load() -> ServerResult<Self> {
        // Start with defaults
        let mut config = Self::default();

        // Override from environment variables
        if let Ok(port) = env::var("SERVER_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.port = port;
            } else {
                warn!("Invalid SERVER_PORT value: {}", port);
            }
        }

        if let Ok(host) = env::var("SERVER_HOST") {
            config.bind_address = host;
        }

        if let Ok(api_key) = env::var("ANTHROPIC_API_KEY") {
            config.anthropic_api_key = Some(api_key);
        }

        if let Ok(model_api_url) = env::var("ANTHROPIC_API_URL") {
            config.model_api_url = model_api_url;
        }

        if let Ok(latex_service_url) = env::var("LATEX_SERVICE_URL") {
            config.latex_service_url = latex_service_url;
        }

        if let Ok(assistant_model) = env::var("ASSISTANT_MODEL") {
            config.assistant_model = assistant_model;
        }

        if let Ok(document_model) = env::var("DOCUMENT_MODEL") {
            config.document_model = document_model;
        }

        if let Ok(origins) = env::var("CORS_ALLOWED_ORIGINS") {
            let origins: Vec<String> = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
            if !origins.is_empty() {
                config.cors_allowed_origins = origins;
            }
        }

        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.log_level = log_level;
        }

        // Add warnings for missing optional fields
        if config.anthropic_api_key.is_none() {
            warn!("No ANTHROPIC_API_KEY provided - model-backed endpoints will return errors!");
        }

        info!("Loaded server configuration");
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_host(),
            anthropic_api_key: None,
            model_api_url: default_model_api_url(),
            latex_service_url: default_latex_service_url(),
            assistant_model: default_assistant_model(),
            document_model: default_document_model(),
            cors_allowed_origins: default_allowed_origins(),
            log_level: default_log_level(),
        }
    }
}
