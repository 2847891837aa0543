use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Structured answer for one symptom submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalAnalysis {
    pub disease: String,
    /// Free-text label such as "High" or "Medium confidence". Only used to pick a display tier.
    #[serde(default)]
    pub confidence: String,
    pub description: String,
    pub precautions: Vec<String>,
    pub medications: Vec<String>,
    #[serde(default)]
    pub workouts: Vec<String>,
    #[serde(default)]
    pub diets: Vec<String>,
}

/// Shape of the object the model is asked to produce. Every field is optional
/// here so that absent and `null` values end up as a `MissingField` error
/// instead of a generic parse failure.
#[derive(Debug, Deserialize)]
struct ModelPayload {
    disease: Option<String>,
    confidence: Option<String>,
    description: Option<String>,
    precautions: Option<Vec<String>>,
    medications: Option<Vec<String>>,
    workouts: Option<Vec<String>>,
    diets: Option<Vec<String>>,
}

impl MedicalAnalysis {
    /// Parse the JSON object extracted from a model reply and check it.
    pub fn from_model_json(json: &str) -> Result<Self> {
        let payload: ModelPayload = serde_json::from_str(json)?;

        let analysis = Self {
            disease: payload
                .disease
                .ok_or(AnalysisError::MissingField("disease"))?,
            confidence: payload.confidence.unwrap_or_default(),
            description: payload
                .description
                .ok_or(AnalysisError::MissingField("description"))?,
            precautions: payload
                .precautions
                .ok_or(AnalysisError::MissingField("precautions"))?,
            medications: payload
                .medications
                .ok_or(AnalysisError::MissingField("medications"))?,
            workouts: payload.workouts.unwrap_or_default(),
            diets: payload.diets.unwrap_or_default(),
        };

        analysis.validate()?;
        Ok(analysis)
    }

    /// Acceptance rule: disease and description must carry text, precautions
    /// and medications must have at least one entry. Workouts and diets are
    /// accepted as given, empty included.
    ///
    /// Stricter than a presence check: whitespace-only text and empty lists
    /// are rejected too.
    pub fn validate(&self) -> Result<()> {
        if self.disease.trim().is_empty() {
            return Err(AnalysisError::MissingField("disease"));
        }
        if self.description.trim().is_empty() {
            return Err(AnalysisError::MissingField("description"));
        }
        if self.precautions.is_empty() {
            return Err(AnalysisError::MissingField("precautions"));
        }
        if self.medications.is_empty() {
            return Err(AnalysisError::MissingField("medications"));
        }
        Ok(())
    }

    /// The payload returned whenever a real analysis cannot be produced.
    pub fn fallback() -> Self {
        Self {
            disease: "Unable to analyze symptoms".to_string(),
            confidence: "Low".to_string(),
            description: "We encountered an issue analyzing your symptoms. Please try again or consult a healthcare professional.".to_string(),
            precautions: to_strings(&[
                "Monitor your symptoms closely",
                "Stay hydrated and get adequate rest",
                "Consult a healthcare professional if symptoms persist or worsen",
                "Seek immediate medical attention for severe symptoms",
            ]),
            medications: to_strings(&[
                "Consult a doctor before taking any medications",
                "Follow prescribed treatments only",
                "Avoid self-medication",
            ]),
            workouts: to_strings(&[
                "Light walking if feeling well enough",
                "Gentle stretching exercises",
                "Avoid strenuous activity until feeling better",
            ]),
            diets: to_strings(&[
                "Stay well hydrated with water",
                "Eat light, easily digestible foods",
                "Include fruits and vegetables for vitamins",
                "Avoid processed foods and excessive caffeine",
            ]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
