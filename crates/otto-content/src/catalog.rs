//! The manufacturing-cell stage and assessment-question catalog

use serde::{Deserialize, Serialize};

/// Display status of a manufacturing stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Active,
    Idle,
    Error,
}

/// A stage of the manufacturing cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturingStage {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Duration in seconds
    pub duration: u32,
    pub icon: String,
    pub status: StageStatus,
}

/// An assessment question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
}

fn stage(
    id: u32,
    name: &str,
    description: &str,
    duration: u32,
    icon: &str,
    status: StageStatus,
) -> ManufacturingStage {
    ManufacturingStage {
        id,
        name: name.to_string(),
        description: description.to_string(),
        duration,
        icon: icon.to_string(),
        status,
    }
}

/// The five stages shown on the manufacturing-cell overview
pub fn stages() -> Vec<ManufacturingStage> {
    vec![
        stage(1, "Input", "Raw materials loaded", 10, "📦", StageStatus::Active),
        stage(2, "Processing", "CNC cuts material", 25, "⚙️", StageStatus::Active),
        stage(3, "Workflow", "Parts transported", 15, "➡️", StageStatus::Idle),
        stage(4, "Output", "Quality checked", 20, "✅", StageStatus::Active),
        stage(5, "Feedback", "Process optimized", 30, "🔄", StageStatus::Error),
    ]
}

/// The four assessment questions, one per manufacturing phase
pub fn questions() -> Vec<Question> {
    let texts = [
        "How do you approach the STAMPING phase of your manufacturing process?",
        "How do you handle the WELDING phase of your manufacturing process?",
        "How do you manage the PAINTING phase of your manufacturing process?",
        "How do you conduct the ASSEMBLY phase of your manufacturing process?",
    ];

    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Question {
            id: i as u32 + 1,
            text: text.to_string(),
        })
        .collect()
}

/// Example high-quality answers, in question order
pub fn example_answers() -> Vec<String> {
    vec![
        "Our stamping process uses precision dies with tolerances of +/-0.05mm to create structural components. We've implemented real-time monitoring systems that analyze pressure distribution and material flow during each press stroke. This allows us to detect and correct deviations before they impact part quality. We currently operate with a 99.7% first-time quality rate and cycle times of 12 seconds per component across our stamping lines.".to_string(),
        "For welding, we employ a combination of robotic MIG and laser welding systems with 6-axis movement capability. Each vehicle frame undergoes 4,200+ precision welds monitored by thermal imaging and ultrasonic testing. Our proprietary weld sequencing minimizes heat distortion while maximizing structural integrity. We've reduced spatter by 85% through advanced parameter optimization and maintain 99.9% weld integrity rates across all safety-critical joints.".to_string(),
        "Our painting process utilizes waterborne basecoats and low-VOC clearcoats applied in climate-controlled spray booths with HEPA filtration. We maintain strict environmental parameters (humidity at 65% ±3%, temperature at 23°C ±1°C) during application. Advanced electrostatic sprayers achieve 94% transfer efficiency, significantly reducing material waste. Every vehicle undergoes automated thickness and uniformity testing, with results digitally logged for traceability.".to_string(),
        "Our assembly operations combine skilled associates with collaborative robots in a synchronized workflow. We use electronic torque monitoring for all critical fasteners, with 100% verification and data logging. Modular sub-assembly stations feed the main line using just-in-time delivery systems. Each vehicle passes through 32 quality verification stations before completion, including dimensional scanning, electrical testing, water ingress evaluation, and dynamic performance assessment. Our first-time-through rate exceeds 98.5%.".to_string(),
    ]
}
