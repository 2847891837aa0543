//! Form collector: holds the symptom text and the in-flight flag for one form.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::error;

use crate::{analysis::MedicalAnalysis, client::SymptomAnalyzer};

pub const MAX_SYMPTOM_CHARS: usize = 1000;

/// User-facing message produced by a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Notice {
    MissingSymptoms,
    Busy,
    Complete,
    Failed,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::MissingSymptoms => "Please describe your symptoms",
            Notice::Busy => "Analysis in progress",
            Notice::Complete => "Analysis Complete",
            Notice::Failed => "Analysis Failed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Notice::MissingSymptoms => {
                "Enter a detailed description of what you're experiencing."
            }
            Notice::Busy => "Please wait for the current analysis to finish.",
            Notice::Complete => "Your symptom analysis is ready below.",
            Notice::Failed => "Unable to analyze symptoms. Please try again.",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::MissingSymptoms | Notice::Failed)
    }
}

/// Outcome of [`SymptomForm::submit`].
#[derive(Debug, Clone)]
pub struct Submission {
    pub notice: Notice,
    pub analysis: Option<MedicalAnalysis>,
}

#[derive(Debug, Default)]
pub struct SymptomForm {
    input: String,
    busy: AtomicBool,
}

impl SymptomForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(text: &str) -> Self {
        let mut form = Self::new();
        form.set_input(text);
        form
    }

    /// Replace the input, keeping at most [`MAX_SYMPTOM_CHARS`] characters.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.chars().take(MAX_SYMPTOM_CHARS).collect();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.input.trim().is_empty()
    }

    /// Run one analysis for the current input.
    ///
    /// Blank input and submissions made while another one is in flight return
    /// immediately without touching the analyzer.
    pub async fn submit(&self, analyzer: &dyn SymptomAnalyzer) -> Submission {
        if self.input.trim().is_empty() {
            return Submission {
                notice: Notice::MissingSymptoms,
                analysis: None,
            };
        }

        if self.busy.swap(true, Ordering::AcqRel) {
            return Submission {
                notice: Notice::Busy,
                analysis: None,
            };
        }
        let _busy = BusyGuard(&self.busy);

        match analyzer.analyze(&self.input).await {
            Ok(analysis) => Submission {
                notice: Notice::Complete,
                analysis: Some(analysis),
            },
            Err(e) => {
                error!("Analysis failed: {:#}", e);
                Submission {
                    notice: Notice::Failed,
                    analysis: None,
                }
            }
        }
    }
}

/// Clears the busy flag when the submission finishes, however it finishes.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
