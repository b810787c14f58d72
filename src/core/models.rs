use chrono::{DateTime, Utc};
use serde::Serialize;

/// Origin of the submitted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentKind {
    #[default]
    Text,
    Pdf,
}

impl DocumentKind {
    pub const ALLOWED: [&'static str; 2] = ["text", "pdf"];

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "text" => Some(DocumentKind::Text),
            "pdf" => Some(DocumentKind::Pdf),
            _ => None,
        }
    }
}

/// A summarization request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeRequest {
    pub text: String,
    pub kind: DocumentKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub summary: String,
    pub word_count: usize,
    pub compression_ratio: i64,
    pub original_length: usize,
}

/// Fields supplied by the caller when recording a summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSummary {
    pub original_text: String,
    pub summary_text: String,
    pub word_count: usize,
    pub compression_ratio: i64,
}

/// A stored summary. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub id: u64,
    pub original_text: String,
    pub summary_text: String,
    pub word_count: usize,
    pub compression_ratio: i64,
    pub created_at: DateTime<Utc>,
}

/// Result of the document extraction endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedDocument {
    pub text: String,
}
