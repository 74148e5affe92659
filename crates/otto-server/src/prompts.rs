//! Prompt templates and sampling parameters
//!
//! Each endpoint pairs a fixed system prompt with fixed sampling
//! parameters; only the user prompt (and, for documents, the type and
//! complexity selectors) varies per request.

use otto_llm::{ChatRequest, Message};

/// System prompt for the assistant endpoint
pub const ASSISTANT_SYSTEM_PROMPT: &str = "You are an expert automotive engineer providing brief, concise responses. Direct the conversation in the way an automotive engineer would.";

/// System prompt for the evaluate endpoint
pub const EVALUATOR_SYSTEM_PROMPT: &str = "You are an expert in manufacturing processes who evaluates and provides feedback on manufacturing processes in the automotive industry. You provide specific, actionable feedback based on best practices.";

/// Build the assistant request for a user prompt
pub fn assistant_request(model: &str, prompt: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        max_tokens: 300,
        temperature: Some(0.7),
        system: Some(ASSISTANT_SYSTEM_PROMPT.to_string()),
        messages: vec![Message::user(prompt)],
    }
}

/// Build the evaluation request for a submission prompt
pub fn evaluation_request(model: &str, prompt: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        max_tokens: 1000,
        temperature: Some(0.2),
        system: Some(EVALUATOR_SYSTEM_PROMPT.to_string()),
        messages: vec![Message::user(prompt)],
    }
}

/// Build the document-generation request for a description prompt
pub fn document_request(
    model: &str,
    prompt: &str,
    document_type: &str,
    complexity: &str,
) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        max_tokens: 4000,
        temperature: None,
        system: Some(document_system_prompt(document_type, complexity)),
        messages: vec![Message::user(prompt)],
    }
}

/// System prompt for document generation, parameterized by the requested
/// document type and complexity level.
fn document_system_prompt(document_type: &str, complexity: &str) -> String {
    format!(
        "You are a LaTeX expert specialized in creating engineering documents. \n\
        You will be given a description of an engineering document or drawing to create.\n\
        You must respond ONLY with valid, compilable LaTeX code for a complete document.\n\
        \n\
        Document type: {document_type}\n\
        Complexity level: {complexity}\n\
        \n\
        Guidelines:\n\
        - Include all necessary LaTeX packages for engineering documents (tikz, amsmath, siunitx, etc.)\n\
        - Structure the document with proper sections\n\
        - Include a document class, begin and end document tags\n\
        - For diagrams, use TikZ or similar LaTeX-native solutions\n\
        - Ensure all equations are properly formatted\n\
        - Do not explain the code, just provide the complete LaTeX document\n\
        - Make sure the document is professional and well-structured\n\
        \n\
        Respond with ONLY the LaTeX code, nothing else."
    )
}
