//! API Lambda handler and request processing

pub mod documents;
pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod summaries;
pub mod summarize;

use std::sync::Arc;

use crate::ai::{InferenceClient, Summarizer};
use crate::core::config::AppConfig;
use crate::errors::SummarizerError;
use crate::storage::{MemoryStore, SummaryStore};

// Re-export the main handler for convenience
pub use handler::{handler, route};

/// Shared state captured by the Lambda service for its whole lifetime.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub summarizer: Arc<dyn Summarizer>,
    pub store: Arc<dyn SummaryStore>,
}

impl AppState {
    #[must_use]
    pub fn new(
        config: AppConfig,
        summarizer: Arc<dyn Summarizer>,
        store: Arc<dyn SummaryStore>,
    ) -> Self {
        Self {
            config,
            summarizer,
            store,
        }
    }

    /// Wires the production inference client and an empty in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: AppConfig) -> Result<Self, SummarizerError> {
        let client = InferenceClient::from_config(&config)?;
        Ok(Self::new(
            config,
            Arc::new(client),
            Arc::new(MemoryStore::new()),
        ))
    }
}
