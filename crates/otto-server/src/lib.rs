//!
//! Otto Server - Main application server for the Otto learning platform
//!
//! This module exports all the components of the Otto Server.

// External dependencies
use std::sync::Arc;

use otto_latex::{InMemoryLatexService, LatexService, RemoteLatexService};
use otto_llm::{AnthropicClient, ChatModel};

/// API module
pub mod api;

/// Server module
pub mod server;

/// Configuration module
pub mod config;

/// Error module
pub mod error;

/// Prompt templates module
pub mod prompts;

// Re-export key types
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::OttoServer;

/// Run function
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    // Initialize logging
    init_logging(&config);

    // Create dependencies
    let model = create_chat_model(&config);
    let latex = create_latex_service(&config);

    // Create server
    let server = OttoServer::new(config, model, latex);

    // Run server
    server.run().await
}

/// Initialize logging
fn init_logging(config: &ServerConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    // Create filter based on config
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // Initialize subscriber
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Create the chat-completion provider client
pub fn create_chat_model(config: &ServerConfig) -> Arc<dyn ChatModel> {
    tracing::info!("Using Anthropic model API at {}", config.model_api_url);
    Arc::new(AnthropicClient::with_base_url(
        config.anthropic_api_key.clone(),
        config.model_api_url.clone(),
    ))
}

/// Create the LaTeX compile service client
pub fn create_latex_service(config: &ServerConfig) -> Arc<dyn LatexService> {
    if config.latex_service_url.starts_with("memory://") {
        // Use the in-memory service for development and testing
        tracing::info!("Using in-memory LaTeX service");
        Arc::new(InMemoryLatexService::new())
    } else {
        tracing::info!("Using LaTeX compile service at {}", config.latex_service_url);
        Arc::new(RemoteLatexService::new(config.latex_service_url.clone()))
    }
}
