//! History lookups.

use super::AppState;
use crate::core::models::SummaryRecord;
use crate::errors::{FieldError, SummarizerError};

pub const MAX_LIMIT: usize = 100;

/// Parses an optional `limit` query value; `None` means the configured default.
///
/// # Errors
///
/// Returns a validation error for values that are not integers in `1..=100`.
pub fn parse_limit(raw: Option<&str>, default: usize) -> Result<usize, SummarizerError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if (1..=MAX_LIMIT).contains(&n) => Ok(n),
        _ => Err(SummarizerError::Validation(vec![FieldError::new(
            "limit",
            "invalid_limit",
            format!("limit must be an integer between 1 and {MAX_LIMIT}"),
        )])),
    }
}

/// # Errors
///
/// Propagates storage failures.
pub async fn recent(state: &AppState, limit: usize) -> Result<Vec<SummaryRecord>, SummarizerError> {
    state.store.get_recent(limit).await
}

/// # Errors
///
/// Returns [`SummarizerError::NotFound`] for an unknown or unparsable id.
pub async fn by_id(state: &AppState, raw_id: &str) -> Result<SummaryRecord, SummarizerError> {
    let not_found = || SummarizerError::NotFound(format!("Summary {raw_id} not found"));
    let id: u64 = raw_id.parse().map_err(|_| not_found())?;
    state.store.get_by_id(id).await?.ok_or_else(not_found)
}
