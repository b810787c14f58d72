//! All inference API functionality

pub mod client;

use async_trait::async_trait;

use crate::errors::SummarizerError;

// Re-export main types for convenience
pub use client::{InferenceClient, extract_summary};

/// Produces a summary for already-validated text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, SummarizerError>;
}
