//! Assessment feedback payload

use serde::{Deserialize, Serialize};

/// Feedback on a manufacturing-process assessment, scored out of 20
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub overall_feedback: String,
    pub score: u32,
    /// One entry per phase, in stamping/welding/painting/assembly order
    pub detailed_feedback: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}

impl Feedback {
    /// The placeholder returned when the evaluator's output carried no
    /// parseable feedback object.
    pub fn fallback() -> Self {
        Self {
            overall_feedback: "The system couldn't properly analyze your responses. Please try again with more detailed information.".to_string(),
            score: 10,
            detailed_feedback: vec![
                "Unable to analyze stamping process.".to_string(),
                "Unable to analyze welding process.".to_string(),
                "Unable to analyze painting process.".to_string(),
                "Unable to analyze assembly process.".to_string(),
            ],
            improvement_suggestions: vec![
                "Provide more specific details about your manufacturing processes.".to_string(),
                "Include information about automation levels, equipment, and quality control measures.".to_string(),
            ],
        }
    }
}
