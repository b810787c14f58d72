//! Summary history storage

pub mod memory;

use async_trait::async_trait;

use crate::core::models::{NewSummary, SummaryRecord};
use crate::errors::SummarizerError;

pub use memory::MemoryStore;

/// Append-only record of produced summaries.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    /// Assigns an id and creation time, stores the record and returns it.
    async fn create(&self, summary: NewSummary) -> Result<SummaryRecord, SummarizerError>;

    async fn get_by_id(&self, id: u64) -> Result<Option<SummaryRecord>, SummarizerError>;

    /// Newest first, at most `limit` records.
    async fn get_recent(&self, limit: usize) -> Result<Vec<SummaryRecord>, SummarizerError>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
