//! Word counts and compression ratio for a finished summary.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryMetrics {
    pub word_count: usize,
    pub compression_ratio: i64,
    pub original_length: usize,
}

/// Number of whitespace-delimited tokens.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Percentage reduction in words, rounded half-up. Negative when the summary
/// is longer than the original; 0 when the original has no words.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn compression_ratio(original_words: usize, summary_words: usize) -> i64 {
    if original_words == 0 {
        return 0;
    }
    let ratio = (1.0 - summary_words as f64 / original_words as f64) * 100.0;
    (ratio + 0.5).floor() as i64
}

#[must_use]
pub fn compute(original: &str, summary: &str) -> SummaryMetrics {
    let summary_words = word_count(summary);
    SummaryMetrics {
        word_count: summary_words,
        compression_ratio: compression_ratio(word_count(original), summary_words),
        // Unicode scalar values, matching the validator's minimum-length unit.
        original_length: original.chars().count(),
    }
}
