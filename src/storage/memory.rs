use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use tracing::debug;

use super::SummaryStore;
use crate::core::models::{NewSummary, SummaryRecord};
use crate::errors::SummarizerError;

#[derive(Debug)]
struct Inner {
    next_id: u64,
    last_created_at: Option<DateTime<Utc>>,
    records: BTreeMap<u64, SummaryRecord>,
}

/// In-memory store living for the lifetime of the process.
///
/// The id counter and the map sit behind one lock so that id assignment and
/// insertion happen atomically.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                last_created_at: None,
                records: BTreeMap::new(),
            }),
        }
    }
}

#[async_trait]
impl SummaryStore for MemoryStore {
    async fn create(&self, summary: NewSummary) -> Result<SummaryRecord, SummarizerError> {
        let mut inner = self.inner.lock().await;

        let id = inner.next_id;
        inner.next_id = id
            .checked_add(1)
            .ok_or_else(|| SummarizerError::Internal("summary id space exhausted".to_string()))?;

        // Keep created_at monotonic with id even if the wall clock steps back.
        let now = Utc::now();
        let created_at = match inner.last_created_at {
            Some(last) if last > now => last,
            _ => now,
        };
        inner.last_created_at = Some(created_at);

        let record = SummaryRecord {
            id,
            original_text: summary.original_text,
            summary_text: summary.summary_text,
            word_count: summary.word_count,
            compression_ratio: summary.compression_ratio,
            created_at,
        };
        inner.records.insert(id, record.clone());
        debug!(id, total = inner.records.len(), "Stored summary");

        Ok(record)
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<SummaryRecord>, SummarizerError> {
        Ok(self.inner.lock().await.records.get(&id).cloned())
    }

    async fn get_recent(&self, limit: usize) -> Result<Vec<SummaryRecord>, SummarizerError> {
        let inner = self.inner.lock().await;
        let mut records: Vec<SummaryRecord> = inner.records.values().cloned().collect();
        drop(inner);

        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        records.truncate(limit);
        Ok(records)
    }

    async fn len(&self) -> usize {
        self.inner.lock().await.records.len()
    }
}
