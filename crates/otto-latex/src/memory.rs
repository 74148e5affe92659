//! In-memory implementation of LatexService
//!
//! This implementation is primarily intended for testing and development
//! purposes. "Compilation" wraps the stored source in a minimal PDF-like
//! payload; all data is lost when the instance is dropped.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{LatexError, LatexResult, LatexService};

/// In-memory implementation of LatexService
#[derive(Debug, Clone, Default)]
pub struct InMemoryLatexService {
    document: Arc<RwLock<Option<String>>>,
    pdf: Arc<RwLock<Option<Vec<u8>>>>,
}

impl InMemoryLatexService {
    /// Create a new in-memory LaTeX service
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently stored document, if any
    pub async fn stored_document(&self) -> Option<String> {
        self.document.read().await.clone()
    }
}

#[async_trait]
impl LatexService for InMemoryLatexService {
    async fn update_latex(&self, latex_code: &str) -> LatexResult<()> {
        let mut document = self.document.write().await;
        *document = Some(latex_code.to_string());

        // A new document invalidates any previously compiled output
        let mut pdf = self.pdf.write().await;
        *pdf = None;

        Ok(())
    }

    async fn compile_latex(&self) -> LatexResult<String> {
        let document = self.document.read().await;
        let source = document
            .as_ref()
            .ok_or_else(|| LatexError::Service("LaTeX file not found".to_string()))?;

        let mut pdf = self.pdf.write().await;
        *pdf = Some(format!("%PDF-1.4\n{}", source).into_bytes());

        Ok(self.pdf_url())
    }

    async fn fetch_pdf(&self) -> LatexResult<Vec<u8>> {
        let pdf = self.pdf.read().await;
        pdf.clone()
            .ok_or_else(|| LatexError::Service("PDF file not found".to_string()))
    }

    fn pdf_url(&self) -> String {
        "memory://latex-pdf".to_string()
    }

    async fn health_check(&self) -> LatexResult<bool> {
        Ok(true)
    }
}
