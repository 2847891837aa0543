pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod form;
pub mod prompt;
pub mod render;

// Re-export commonly used types
pub use analysis::MedicalAnalysis;
pub use client::{AnalysisClient, SymptomAnalyzer};
pub use config::{ApiKey, OpenRouterConfig};
pub use error::{AnalysisError, Result};
pub use extract::extract_json_object;
pub use form::{MAX_SYMPTOM_CHARS, Notice, Submission, SymptomForm};
pub use prompt::build_prompt;
pub use render::{ConfidenceTier, ListSection, ResultsView};
