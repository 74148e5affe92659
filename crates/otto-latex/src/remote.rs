//! HTTP implementation of LatexService
//!
//! Talks to the compile service over its fixed endpoints: `update-latex`
//! to store the document, `compile-latex` to build it, and `latex-pdf`
//! to retrieve the result. The service reports failures as a JSON body
//! with an `error` key, sometimes alongside HTTP 200, so success is
//! judged on the body as well as the status.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::{LatexError, LatexResult, LatexService};

/// HTTP client for the external LaTeX compilation service
#[derive(Debug, Clone)]
pub struct RemoteLatexService {
    /// Base URL of the service
    base_url: String,

    /// HTTP client
    client: Client,
}

impl RemoteLatexService {
    /// Create a new RemoteLatexService for the given base URL
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the URL for storing LaTeX source
    fn update_url(&self) -> String {
        format!("{}/update-latex/", self.base_url)
    }

    /// Get the URL for triggering compilation
    fn compile_url(&self) -> String {
        format!("{}/compile-latex/", self.base_url)
    }

    /// Parse a service response body, surfacing in-body `error` reports.
    async fn parse_body(response: reqwest::Response) -> LatexResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(LatexError::Service(format!(
                "Service returned {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LatexError::Http(e.to_string()))?;

        if let Some(message) = body["error"].as_str() {
            return Err(LatexError::Service(message.to_string()));
        }

        Ok(body)
    }
}

#[async_trait]
impl LatexService for RemoteLatexService {
    async fn update_latex(&self, latex_code: &str) -> LatexResult<()> {
        debug!(bytes = latex_code.len(), "Storing LaTeX source");

        // The service expects a multipart form field, not a JSON body
        let form = reqwest::multipart::Form::new().text("latex_code", latex_code.to_string());

        let response = self
            .client
            .post(self.update_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| LatexError::Http(e.to_string()))?;

        Self::parse_body(response).await?;
        Ok(())
    }

    async fn compile_latex(&self) -> LatexResult<String> {
        info!("Triggering compilation");

        let response = self
            .client
            .post(self.compile_url())
            .send()
            .await
            .map_err(|e| LatexError::Http(e.to_string()))?;

        let body = Self::parse_body(response).await?;
        debug!(message = body["message"].as_str().unwrap_or(""), "Compilation finished");

        Ok(self.pdf_url())
    }

    async fn fetch_pdf(&self) -> LatexResult<Vec<u8>> {
        let response = self
            .client
            .get(self.pdf_url())
            .send()
            .await
            .map_err(|e| LatexError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(%status, "Failed to fetch PDF");
            return Err(LatexError::Service(format!(
                "Service returned {}: {}",
                status, error_body
            )));
        }

        // A missing PDF comes back as a JSON error body, not a document
        let is_json = response
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("application/json"))
            .unwrap_or(false);

        if is_json {
            let body: Value = response
                .json()
                .await
                .map_err(|e| LatexError::Http(e.to_string()))?;
            let message = body["error"].as_str().unwrap_or("PDF not available");
            return Err(LatexError::Service(message.to_string()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LatexError::Http(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    fn pdf_url(&self) -> String {
        format!("{}/latex-pdf/", self.base_url)
    }

    async fn health_check(&self) -> LatexResult<bool> {
        debug!("Performing health check");

        // Any HTTP response counts as reachable; the service has no
        // dedicated health endpoint.
        match self.client.get(&self.base_url).send().await {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }
}
