//! The summarization pipeline: validate, infer, measure, record.

use tracing::info;

use super::AppState;
use crate::core::metrics;
use crate::core::models::{NewSummary, SummarizeResponse};
use crate::core::validation;
use crate::errors::SummarizerError;

/// Runs one summarization request end to end.
///
/// Nothing is written to the store unless inference succeeded.
///
/// # Errors
///
/// Propagates validation, configuration, upstream and storage failures.
pub async fn summarize(state: &AppState, body: &str) -> Result<SummarizeResponse, SummarizerError> {
    let request = validation::validate_body(body)?;
    info!(kind = ?request.kind, chars = request.text.chars().count(), "Summarization request accepted");

    let summary = state.summarizer.summarize(&request.text).await?;
    let stats = metrics::compute(&request.text, &summary);

    let record = state
        .store
        .create(NewSummary {
            original_text: request.text,
            summary_text: summary,
            word_count: stats.word_count,
            compression_ratio: stats.compression_ratio,
        })
        .await?;
    info!(
        id = record.id,
        word_count = stats.word_count,
        compression_ratio = stats.compression_ratio,
        "Summary recorded"
    );

    Ok(SummarizeResponse {
        summary: record.summary_text,
        word_count: stats.word_count,
        compression_ratio: stats.compression_ratio,
        original_length: stats.original_length,
    })
}
