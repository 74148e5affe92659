//! API module for the Otto Server
//!
//! This module contains the API routes and handlers for the Otto Server.

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod assistant;
pub mod curriculum;
pub mod documents;
pub mod errors;
pub mod evaluate;
pub mod health;

use crate::config::ServerConfig;
use crate::server::OttoServer;

/// Build the router for API endpoints
pub fn build_router(server: Arc<OttoServer>) -> Router {
    let cors = cors_layer(&server.config);

    Router::new()
        // Assistant and assessment
        .route("/v1/assistant", post(assistant::assistant_handler))
        .route("/v1/evaluate", post(evaluate::evaluate_handler))
        // Documents
        .route("/v1/documents/generate", post(documents::generate_document_handler))
        .route("/v1/documents/latex", post(documents::update_latex_handler))
        .route("/v1/documents/compile", post(documents::compile_document_handler))
        .route("/v1/documents/pdf", get(documents::get_pdf_handler))
        // Curriculum
        .route("/v1/stages", get(curriculum::list_stages_handler))
        .route("/v1/questions", get(curriculum::list_questions_handler))
        // Health check
        .route("/health", get(health::health_check))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // Shared state
        .with_state(server)
}

/// CORS layer allowing the configured front-end origins
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

// Re-export all modules for easier imports
pub use errors::*;
