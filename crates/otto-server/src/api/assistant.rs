//! Assistant API
//!
//! Single-turn question answering with the automotive-engineer persona.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::errors::api_error_response;
use crate::server::OttoServer;

/// Request for the assistant endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct AssistantRequest {
    #[serde(default)]
    pub prompt: String,
}

/// Response for the assistant endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub answer: String,
}

/// Handler for assistant prompts
pub async fn assistant_handler(
    State(server): State<Arc<OttoServer>>,
    Json(request): Json<AssistantRequest>,
) -> impl IntoResponse {
    info!("Assistant prompt received");

    match server.ask_assistant(&request.prompt).await {
        Ok(answer) => (StatusCode::OK, Json(AssistantResponse { answer })).into_response(),
        Err(err) => {
            error!(?err, "Failed to answer assistant prompt");
            api_error_response(&err)
        }
    }
}
