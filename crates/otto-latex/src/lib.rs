//! Otto LaTeX service client
//!
//! Provides the abstraction and implementations for the external LaTeX
//! compilation service. The LatexService trait defines a contract for
//! storing a document, compiling it, and retrieving the resulting PDF.

use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur during compile-service operations
#[derive(Error, Debug)]
pub enum LatexError {
    /// The service reported a failure, over any HTTP status
    #[error("Compile service error: {0}")]
    Service(String),

    /// Transport-level failure
    #[error("HTTP request error: {0}")]
    Http(String),
}

/// Result type for LatexService operations
pub type LatexResult<T> = Result<T, LatexError>;

/// Remove empty or whitespace-only lines from LaTeX code.
pub fn clean_latex_code(code: &str) -> String {
    code.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trait defining the contract for the LaTeX compilation service
#[async_trait]
pub trait LatexService: Send + Sync + Debug {
    /// Store LaTeX source on the service, replacing the current document
    async fn update_latex(&self, latex_code: &str) -> LatexResult<()>;

    /// Compile the stored document and return the PDF retrieval URL
    async fn compile_latex(&self) -> LatexResult<String>;

    /// Fetch the compiled PDF bytes
    async fn fetch_pdf(&self) -> LatexResult<Vec<u8>>;

    /// URL where the compiled PDF is served
    fn pdf_url(&self) -> String;

    /// Check whether the service is reachable
    async fn health_check(&self) -> LatexResult<bool>;
}

pub mod memory;
pub mod remote;

pub use memory::InMemoryLatexService;
pub use remote::RemoteLatexService;
