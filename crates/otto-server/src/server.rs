//! Main Otto Server implementation
//!
//! This module contains the OttoServer implementation: one operation per
//! endpoint, each a single call to the model or the compile service.

use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::{error, info, info_span, warn, Instrument};

use otto_content::Feedback;
use otto_latex::{clean_latex_code, LatexService};
use otto_llm::{extract_json_object, ChatModel};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::prompts;

/// A generated document: the cleaned LaTeX, and either a PDF URL or the
/// compile failure that prevented one.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub latex_code: String,
    pub pdf_url: Option<String>,
    pub compile_error: Option<String>,
}

/// Main server implementation
#[derive(Clone)]
pub struct OttoServer {
    /// Configuration
    pub config: ServerConfig,

    /// Chat-completion provider client
    model: Arc<dyn ChatModel>,

    /// LaTeX compile service client
    latex: Arc<dyn LatexService>,
}

/// Manual Debug implementation that doesn't try to debug the trait objects
impl std::fmt::Debug for OttoServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OttoServer")
            .field("config", &self.config)
            .finish()
    }
}

impl OttoServer {
    /// Create a new OttoServer
    pub fn new(
        config: ServerConfig,
        model: Arc<dyn ChatModel>,
        latex: Arc<dyn LatexService>,
    ) -> Self {
        Self {
            config,
            model,
            latex,
        }
    }

    /// Run the server
    pub async fn run(self) -> ServerResult<()> {
        info!("Starting Otto Server");

        let addr: SocketAddr = format!("{}:{}", self.config.bind_address, self.config.port)
            .parse()
            .map_err(|e| ServerError::ConfigError(format!("Invalid bind address: {}", e)))?;

        // Build the API router
        let app = crate::api::build_router(Arc::new(self));

        // Create and bind the TCP listener
        let listener = TcpListener::bind(addr).await?;
        info!("Listening on {}", listener.local_addr()?);

        // Run the server
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Answer a free-form prompt with the automotive-engineer persona
    pub async fn ask_assistant(&self, prompt: &str) -> ServerResult<String> {
        Self::require_prompt(prompt)?;

        let request = prompts::assistant_request(&self.config.assistant_model, prompt);
        let answer = self.model.complete(request).await?;

        Ok(answer)
    }

    /// Evaluate an assessment submission and return the feedback object
    pub async fn evaluate_submission(&self, prompt: &str) -> ServerResult<Value> {
        Self::require_prompt(prompt)?;

        let request = prompts::evaluation_request(&self.config.assistant_model, prompt);
        let text = self.model.complete(request).await?;

        // Best effort: the evaluator is asked for JSON but answers in prose
        // often enough that the object has to be dug out of the text.
        match extract_json_object(&text) {
            Some(snippet) => serde_json::from_str(snippet).map_err(|e| {
                error!(%e, "Extracted feedback snippet does not parse");
                ServerError::InvalidModelOutput(format!("Error parsing feedback: {}", e))
            }),
            None => {
                warn!("No JSON object in evaluator output, returning fallback feedback");
                serde_json::to_value(Feedback::fallback())
                    .map_err(|e| ServerError::InternalError(format!("{}", e)))
            }
        }
    }

    /// Generate a LaTeX document from a description, then store and compile
    /// it on the compile service.
    pub async fn generate_document(
        &self,
        prompt: &str,
        document_type: &str,
        complexity: &str,
    ) -> ServerResult<GeneratedDocument> {
        let span = info_span!("generate_document", %document_type, %complexity);
        async move {
            Self::require_prompt(prompt)?;

            info!("Generating document");
            let request = prompts::document_request(
                &self.config.document_model,
                prompt,
                document_type,
                complexity,
            );
            let latex_code = clean_latex_code(&self.model.complete(request).await?);

            // The document is returned even when compilation fails, so the
            // caller can hand-fix the source.
            let compiled = async {
                self.latex.update_latex(&latex_code).await?;
                self.latex.compile_latex().await
            }
            .await;

            match compiled {
                Ok(pdf_url) => {
                    info!("Document generated and compiled");
                    Ok(GeneratedDocument {
                        latex_code,
                        pdf_url: Some(pdf_url),
                        compile_error: None,
                    })
                }
                Err(err) => {
                    error!(?err, "Failed to compile generated document");
                    Ok(GeneratedDocument {
                        latex_code,
                        pdf_url: None,
                        compile_error: Some(format!("{}", err)),
                    })
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Store hand-written LaTeX on the compile service
    pub async fn save_latex(&self, latex_code: &str) -> ServerResult<()> {
        if latex_code.is_empty() {
            return Err(ServerError::ValidationError(
                "Missing latex_code parameter".to_string(),
            ));
        }

        let cleaned = clean_latex_code(latex_code);
        self.latex.update_latex(&cleaned).await?;

        Ok(())
    }

    /// Compile the stored document and return the PDF URL
    pub async fn compile_document(&self) -> ServerResult<String> {
        let pdf_url = self.latex.compile_latex().await?;
        Ok(pdf_url)
    }

    /// Fetch the compiled PDF bytes
    pub async fn fetch_pdf(&self) -> ServerResult<Vec<u8>> {
        let pdf = self.latex.fetch_pdf().await?;
        Ok(pdf)
    }

    /// Whether a model credential is configured
    pub fn model_configured(&self) -> bool {
        self.config.anthropic_api_key.is_some()
    }

    /// Check compile service health
    pub async fn check_latex_service_health(&self) -> ServerResult<bool> {
        match self.latex.health_check().await {
            Ok(healthy) => Ok(healthy),
            Err(err) => {
                error!(?err, "LaTeX service health check failed");
                Ok(false)
            }
        }
    }

    fn require_prompt(prompt: &str) -> ServerResult<()> {
        if prompt.is_empty() {
            return Err(ServerError::ValidationError(
                "Missing prompt parameter".to_string(),
            ));
        }
        Ok(())
    }
}
