/// Summarizer - a validating proxy in front of a hosted text-summarization model.
///
/// The crate runs as a single API Lambda behind API Gateway:
/// 1. Requests are validated and forwarded to the inference endpoint
/// 2. Word statistics are computed for the returned summary
/// 3. Results are kept in an in-memory history for the lifetime of the
///    execution environment
///
/// # Architecture
///
/// - `api` routes gateway events and maps failures to HTTP responses
/// - `ai` talks to the hosted model through the [`ai::Summarizer`] seam
/// - `storage` holds summaries behind the [`storage::SummaryStore`] seam
/// - `core` carries configuration, models, validation and metrics
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use summarizer::api::AppState;
/// use summarizer::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     summarizer::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let state = AppState::from_config(config)?;
///
///     let body = r#"{"text": "Rust is a general-purpose programming language emphasizing performance, type safety and concurrency."}"#;
///     let response = summarizer::api::summarize::summarize(&state, body).await?;
///     println!("{} words, {}% shorter", response.word_count, response.compression_ratio);
///
///     let recent = state.store.get_recent(10).await?;
///     println!("{} summaries so far", recent.len());
///     Ok(())
/// }
/// ```
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod storage;

pub use errors::SummarizerError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Installs a tracing-subscriber JSON formatter suitable for `CloudWatch`
/// Logs. Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
