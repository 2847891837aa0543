use thiserror::Error;

/// Every way a symptom analysis can fail before a usable payload is produced.
///
/// Callers of [`crate::AnalysisClient::analyze`] never see these: they are
/// collapsed into the fallback payload and only surface in the logs.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("request to analysis API failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("analysis API request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode analysis API response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("no response content received")]
    EmptyContent,

    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("invalid JSON in response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid response structure: `{0}` is missing or empty")]
    MissingField(&'static str),
}

impl AnalysisError {
    /// Short stable label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Transport(_) => "transport",
            AnalysisError::Status { .. } => "status",
            AnalysisError::Decode(_) => "decode",
            AnalysisError::EmptyContent => "empty_content",
            AnalysisError::NoJsonObject => "no_json_object",
            AnalysisError::InvalidJson(_) => "invalid_json",
            AnalysisError::MissingField(_) => "missing_field",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
