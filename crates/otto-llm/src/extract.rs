//! Best-effort extraction of a JSON object from model output
//!
//! Models asked to answer with JSON routinely wrap the object in prose or
//! code fences. Extraction is purely syntactic: the span from the first `{`
//! to the last `}`, newlines included. Whether the span parses is the
//! caller's concern.

use regex::Regex;

/// Find the JSON object substring in free-form model output, if any.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let pattern = Regex::new(r"(?s)\{.*\}").expect("JSON object pattern is valid");
    pattern.find(text).map(|m| m.as_str())
}
