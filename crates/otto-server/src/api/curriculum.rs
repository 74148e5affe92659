//! Curriculum API
//!
//! Serves the static manufacturing-cell and assessment catalog.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use otto_content::{catalog, Question};

/// Response for the question set
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionSetResponse {
    pub questions: Vec<Question>,
    pub example_answers: Vec<String>,
}

/// Handler for listing manufacturing stages
pub async fn list_stages_handler() -> impl IntoResponse {
    info!("Listing manufacturing stages");

    (StatusCode::OK, Json(catalog::stages()))
}

/// Handler for listing assessment questions
pub async fn list_questions_handler() -> impl IntoResponse {
    info!("Listing assessment questions");

    (
        StatusCode::OK,
        Json(QuestionSetResponse {
            questions: catalog::questions(),
            example_answers: catalog::example_answers(),
        }),
    )
}
