use serde::Serialize;
use thiserror::Error;

/// Message returned to callers for failures whose details must not leak.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate summary";

/// One violated field in a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            code: code.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Invalid input")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    Configuration(String),

    #[error("Inference API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid response from inference API: {0}")]
    UpstreamContract(String),

    #[error("Failed to reach inference API: {0}")]
    Transport(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SummarizerError {
    /// HTTP status this failure surfaces as at the handler boundary.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            SummarizerError::Validation(_) => 400,
            SummarizerError::NotFound(_) => 404,
            SummarizerError::Configuration(_)
            | SummarizerError::Upstream { .. }
            | SummarizerError::UpstreamContract(_)
            | SummarizerError::Transport(_)
            | SummarizerError::Internal(_) => 500,
        }
    }

    /// Caller-facing message. Internal failures collapse to a generic text.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            SummarizerError::Internal(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    #[must_use]
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            SummarizerError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        SummarizerError::Transport(error.to_string())
    }
}
