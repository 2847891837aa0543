//! View model for the results cards.

use serde::Serialize;

use crate::analysis::MedicalAnalysis;

pub const DISCLAIMER_TITLE: &str = "Important Medical Disclaimer";
pub const DISCLAIMER: &str = "This AI analysis is for informational purposes only and should not replace professional medical advice. Always consult with qualified healthcare providers for accurate diagnosis and treatment. In case of emergency, contact emergency services immediately.";

/// Display tier derived from the model's free-text confidence label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceTier {
    Success,
    Warning,
    Info,
}

impl ConfidenceTier {
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("high") {
            ConfidenceTier::Success
        } else if label.contains("medium") || label.contains("moderate") {
            ConfidenceTier::Warning
        } else {
            ConfidenceTier::Info
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ConfidenceTier::Success => "tier-success",
            ConfidenceTier::Warning => "tier-warning",
            ConfidenceTier::Info => "tier-info",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListSection {
    pub title: &'static str,
    /// Accent used for the section icon and bullets.
    pub accent: &'static str,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub disease: String,
    pub description: String,
    pub confidence_label: String,
    pub tier: ConfidenceTier,
    pub sections: Vec<ListSection>,
    pub disclaimer_title: &'static str,
    pub disclaimer: &'static str,
}

impl From<&MedicalAnalysis> for ResultsView {
    fn from(analysis: &MedicalAnalysis) -> Self {
        let section = |title, accent, items: &[String]| ListSection {
            title,
            accent,
            items: items.to_vec(),
        };

        Self {
            disease: analysis.disease.clone(),
            description: analysis.description.clone(),
            confidence_label: format!("{} Confidence", analysis.confidence),
            tier: ConfidenceTier::from_label(&analysis.confidence),
            sections: vec![
                section("Precautions", "warning", &analysis.precautions),
                section("Medications", "info", &analysis.medications),
                section("Recommended Exercises", "success", &analysis.workouts),
                section("Dietary Recommendations", "primary", &analysis.diets),
            ],
            disclaimer_title: DISCLAIMER_TITLE,
            disclaimer: DISCLAIMER,
        }
    }
}
