//! Evaluate API
//!
//! Scores a manufacturing-process assessment submission via the evaluator
//! persona and returns the feedback object extracted from its output.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use crate::api::errors::api_error_response;
use crate::server::OttoServer;

/// Request for the evaluate endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub prompt: String,
}

/// Response for the evaluate endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub feedback: Value,
}

/// Handler for assessment submissions
pub async fn evaluate_handler(
    State(server): State<Arc<OttoServer>>,
    Json(request): Json<EvaluateRequest>,
) -> impl IntoResponse {
    info!("Assessment submission received");

    match server.evaluate_submission(&request.prompt).await {
        Ok(feedback) => (StatusCode::OK, Json(EvaluateResponse { feedback })).into_response(),
        Err(err) => {
            error!(?err, "Failed to evaluate submission");
            api_error_response(&err)
        }
    }
}
