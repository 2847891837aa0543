//! Server-rendered page for the symptom form and results cards.

use askama::Template;
use medicheck_core::{MAX_SYMPTOM_CHARS, Notice, ResultsView, Submission, SymptomForm};

pub const PAGE_DISCLAIMER: &str = "This tool is for informational purposes only and is not a substitute for professional medical advice, diagnosis, or treatment. Always consult with qualified healthcare providers for medical concerns.";

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub app_title: String,
    pub symptoms: String,
    pub char_count: usize,
    pub max_chars: usize,
    pub busy: bool,
    pub notice: Option<NoticeView>,
    pub results: Option<ResultsView>,
    pub page_disclaimer: &'static str,
}

/// View model for the banner shown after a submission attempt.
pub struct NoticeView {
    pub title: &'static str,
    pub description: &'static str,
    pub is_error: bool,
}

impl From<Notice> for NoticeView {
    fn from(notice: Notice) -> Self {
        Self {
            title: notice.title(),
            description: notice.description(),
            is_error: notice.is_error(),
        }
    }
}

impl IndexPage {
    pub fn new(app_title: &str, form: &SymptomForm, submission: Option<&Submission>) -> Self {
        Self {
            app_title: app_title.to_string(),
            symptoms: form.input().to_string(),
            char_count: form.char_count(),
            max_chars: MAX_SYMPTOM_CHARS,
            busy: form.is_busy(),
            notice: submission.map(|s| NoticeView::from(s.notice)),
            results: submission
                .and_then(|s| s.analysis.as_ref())
                .map(ResultsView::from),
            page_disclaimer: PAGE_DISCLAIMER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medicheck_core::MedicalAnalysis;

    #[test]
    fn empty_form_renders_without_results() {
        let page = IndexPage::new("MediCheck AI", &SymptomForm::new(), None);
        let html = page.render().unwrap();

        assert!(html.contains("Describe Your Symptoms"));
        assert!(html.contains("0/1000"));
        assert!(!html.contains("Possible Condition"));
    }

    #[test]
    fn results_and_notice_are_rendered() {
        let form = SymptomForm::with_input("fever");
        let submission = Submission {
            notice: Notice::Complete,
            analysis: Some(MedicalAnalysis {
                confidence: "Moderate".to_string(),
                ..MedicalAnalysis::fallback()
            }),
        };

        let html = IndexPage::new("MediCheck AI", &form, Some(&submission))
            .render()
            .unwrap();

        assert!(html.contains("Analysis Complete"));
        assert!(html.contains("Possible Condition"));
        assert!(html.contains("Unable to analyze symptoms"));
        assert!(html.contains("Moderate Confidence"));
        assert!(html.contains("tier-warning"));
        assert!(html.contains("Dietary Recommendations"));
        assert!(html.contains("Avoid self-medication"));
        assert!(html.contains("Important Medical Disclaimer"));
        assert!(html.contains("5/1000"));
    }

    #[test]
    fn model_text_is_escaped() {
        let form = SymptomForm::with_input("<b>rash</b>");
        let submission = Submission {
            notice: Notice::Complete,
            analysis: Some(MedicalAnalysis {
                disease: "<script>alert(1)</script>".to_string(),
                ..MedicalAnalysis::fallback()
            }),
        };

        let html = IndexPage::new("MediCheck AI", &form, Some(&submission))
            .render()
            .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(!html.contains("<b>rash</b>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
