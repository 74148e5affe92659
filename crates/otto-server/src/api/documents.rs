//! Documents API
//!
//! Engineering-document generation and the manual LaTeX flow. Generation
//! answers 200 with a `status` field even when compilation fails, so the
//! caller still receives the generated source.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::errors::api_error_response;
use crate::server::OttoServer;

/// Request for document generation
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateDocumentRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default = "default_document_type")]
    pub document_type: String,
    #[serde(default = "default_complexity")]
    pub complexity: String,
}

fn default_document_type() -> String {
    "general".to_string()
}

fn default_complexity() -> String {
    "standard".to_string()
}

/// Response for document generation
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latex_code: Option<String>,
}

/// Request for storing hand-written LaTeX
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateLatexRequest {
    #[serde(default)]
    pub latex_code: String,
}

/// Response for compilation
#[derive(Debug, Serialize, Deserialize)]
pub struct CompileResponse {
    pub message: String,
    pub pdf_url: String,
}

/// Handler for generating a document from a description
pub async fn generate_document_handler(
    State(server): State<Arc<OttoServer>>,
    Json(request): Json<GenerateDocumentRequest>,
) -> impl IntoResponse {
    info!(document_type = %request.document_type, "Document generation requested");

    match server
        .generate_document(&request.prompt, &request.document_type, &request.complexity)
        .await
    {
        Ok(document) => {
            let response = match document.compile_error {
                None => DocumentResponse {
                    status: "success".to_string(),
                    message: "LaTeX generated and compiled successfully".to_string(),
                    pdf_url: document.pdf_url,
                    latex_code: Some(document.latex_code),
                },
                Some(compile_error) => DocumentResponse {
                    status: "error".to_string(),
                    message: compile_error,
                    pdf_url: None,
                    latex_code: Some(document.latex_code),
                },
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            error!(?err, "Failed to generate document");
            api_error_response(&err)
        }
    }
}

/// Handler for storing hand-written LaTeX on the compile service
pub async fn update_latex_handler(
    State(server): State<Arc<OttoServer>>,
    Json(request): Json<UpdateLatexRequest>,
) -> impl IntoResponse {
    info!("LaTeX update requested");

    match server.save_latex(&request.latex_code).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "LaTeX code saved successfully" })),
        )
            .into_response(),
        Err(err) => {
            error!(?err, "Failed to save LaTeX");
            api_error_response(&err)
        }
    }
}

/// Handler for compiling the stored document
pub async fn compile_document_handler(
    State(server): State<Arc<OttoServer>>,
) -> impl IntoResponse {
    info!("Compilation requested");

    match server.compile_document().await {
        Ok(pdf_url) => (
            StatusCode::OK,
            Json(CompileResponse {
                message: "PDF compiled successfully".to_string(),
                pdf_url,
            }),
        )
            .into_response(),
        Err(err) => {
            error!(?err, "Failed to compile document");
            api_error_response(&err)
        }
    }
}

/// Handler for fetching the compiled PDF
pub async fn get_pdf_handler(State(server): State<Arc<OttoServer>>) -> impl IntoResponse {
    match server.fetch_pdf().await {
        Ok(pdf) => {
            let mut response = Response::new(axum::body::Body::from(pdf));
            response
                .headers_mut()
                .insert("Content-Type", HeaderValue::from_static("application/pdf"));
            (StatusCode::OK, response).into_response()
        }
        Err(err) => {
            error!(?err, "Failed to fetch PDF");
            api_error_response(&err)
        }
    }
}
