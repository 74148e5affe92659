//! Error types for the Otto Server
//!
//! This module contains the error types used throughout the server.

use thiserror::Error;

use otto_latex::LatexError;
use otto_llm::LlmError;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Chat-completion provider error
    #[error("Model provider error: {0}")]
    ModelProviderError(String),

    /// The model's output could not be used
    #[error("Invalid model output: {0}")]
    InvalidModelOutput(String),

    /// LaTeX compile service error
    #[error("LaTeX service error: {0}")]
    LatexServiceError(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

// Implement conversions from other error types
impl From<LlmError> for ServerError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingCredentials => {
                ServerError::ConfigError("API key configuration error".to_string())
            }
            LlmError::EmptyResponse => ServerError::InvalidModelOutput(format!("{}", err)),
            LlmError::Api { .. } | LlmError::Http(_) => {
                ServerError::ModelProviderError(format!("{}", err))
            }
        }
    }
}

impl From<LatexError> for ServerError {
    fn from(err: LatexError) -> Self {
        ServerError::LatexServiceError(format!("{}", err))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::InternalError(format!("IO error: {}", err))
    }
}
