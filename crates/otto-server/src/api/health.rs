//! Health check endpoint for the Otto Server
//!
//! This module contains the health check handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::server::OttoServer;

/// Health check handler
///
/// This endpoint provides basic health information about the server and
/// its dependencies: the chat-completion provider (credential presence)
/// and the LaTeX compile service (reachability).
pub async fn health_check(State(server): State<Arc<OttoServer>>) -> impl IntoResponse {
    info!("Health check requested");

    // Perform basic health check
    let mut response = json!({
        "status": "UP",
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {},
    });

    // Check model provider credential
    let model_status = if server.model_configured() {
        "UP"
    } else {
        "DOWN"
    };
    response["dependencies"]["modelProvider"] = json!({
        "status": model_status,
    });

    // Check LaTeX compile service
    let latex_status = match server.check_latex_service_health().await {
        Ok(true) => "UP",
        Ok(false) => "DEGRADED",
        Err(_) => "DOWN",
    };
    response["dependencies"]["latexService"] = json!({
        "status": latex_status,
    });

    // Determine overall status
    let overall_status = if model_status == "DOWN" || latex_status == "DOWN" {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (overall_status, Json(response))
}
