//! Error handling for the Otto Server API
//!
//! This module contains standardized error handling for the API.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::error::ServerError;

/// General error response handler for API errors
/// This will convert a server error into a standardized API error response
pub fn api_error_response(err: &ServerError) -> axum::response::Response {
    let (status_code, error_code, error_message) = match err {
        ServerError::ValidationError(msg) => {
            (StatusCode::BAD_REQUEST, "ERR_VALIDATION_ERROR", msg.clone())
        }
        ServerError::ConfigError(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ERR_CONFIG_ERROR",
            msg.clone(),
        ),
        ServerError::ModelProviderError(msg) => (
            StatusCode::BAD_GATEWAY,
            "ERR_MODEL_PROVIDER_ERROR",
            msg.clone(),
        ),
        ServerError::InvalidModelOutput(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ERR_INVALID_MODEL_OUTPUT",
            msg.clone(),
        ),
        ServerError::LatexServiceError(msg) => (
            StatusCode::BAD_GATEWAY,
            "ERR_LATEX_SERVICE_ERROR",
            msg.clone(),
        ),
        ServerError::InternalError(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ERR_INTERNAL_SERVER_ERROR",
            msg.clone(),
        ),
    };

    // Create standardized error response
    let error_response = json!({
        "error": error_message,
        "errorDetails": {
            "errorCode": error_code,
            "errorMessage": error_message,
        }
    });

    (status_code, Json(error_response)).into_response()
}
