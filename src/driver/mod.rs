//! Bounded-input summarization driver
//!
//! Drives a length-constrained generative model across documents of
//! unbounded size. The model accepts inputs only up to an internal token
//! budget; this driver guarantees a summary for any input length via a
//! three-level fallback, discovering the workable granularity empirically by
//! retrying at progressively finer splits only on failure:
//!
//! 1. **Whole document**: one model call; on success its output is the
//!    summary, unmodified.
//! 2. **Per paragraph**: on a length-exceeded failure, split at line
//!    boundaries, drop empty fragments, summarize each paragraph
//!    independently, and join the partial summaries with newlines in the
//!    original order.
//! 3. **Sentence segments**: a paragraph that is itself too long is split at
//!    periods and partitioned into a small number of contiguous segments
//!    (two by default), each re-joined with `". "` and summarized in turn.
//!
//! No static chunk size is safe up front — paragraph density and sentence
//! length vary too much across documents — which is why boundaries are never
//! precomputed.
//!
//! Known limitation: the segment count is fixed per call rather than derived
//! from how far a paragraph overflows the budget, so a sentence segment that
//! still exceeds the budget fails the whole call with
//! [`SummarizeError::LengthExceeded`].

#[cfg(test)]
mod driver_tests;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{GenerateError, GenerativeModel, SummarizeError};

/// How a too-long paragraph is partitioned into sentence segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPolicy {
    /// Number of contiguous sentence segments per oversized paragraph
    ///
    /// All segments but the last hold `floor(sentence_count / segments)`
    /// sentences; the last takes the remainder.
    pub segments: usize,
}

impl Default for SplitPolicy {
    fn default() -> Self {
        Self { segments: 2 }
    }
}

/// Summarize `document` with the default split policy
///
/// See [`summarize_bounded_with`].
pub fn summarize_bounded(
    model: &dyn GenerativeModel,
    document: &str,
) -> Result<String, SummarizeError> {
    summarize_bounded_with(model, document, SplitPolicy::default())
}

/// Summarize `document`, recovering from length-exceeded failures by
/// progressively finer splitting
///
/// For any document within the model's budget this issues exactly one model
/// call and returns its decoded text unmodified. An empty (or
/// whitespace-only) document short-circuits to an empty summary with no
/// model calls. Errors other than length-exceeded abort immediately and
/// propagate to the caller untouched.
pub fn summarize_bounded_with(
    model: &dyn GenerativeModel,
    document: &str,
    policy: SplitPolicy,
) -> Result<String, SummarizeError> {
    if document.trim().is_empty() {
        return Ok(String::new());
    }

    match attempt(model, document) {
        Ok(summary) => Ok(summary),
        Err(GenerateError::LengthExceeded) => {
            debug!(
                len = document.len(),
                "document exceeds model budget, retrying per paragraph"
            );
            summarize_by_paragraph(model, document, policy)
        }
        Err(GenerateError::Backend(e)) => Err(SummarizeError::Backend(e)),
    }
}

/// One generation pass, with a proactive budget check when available
///
/// Runtimes that report a token budget get the input length checked up
/// front; otherwise the reactive length-exceeded signal from the generation
/// itself is the only detector. Both routes feed the same recovery.
fn attempt(model: &dyn GenerativeModel, text: &str) -> Result<String, GenerateError> {
    if let Some(budget) = model.token_budget() {
        if model.count_tokens(text) > budget {
            return Err(GenerateError::LengthExceeded);
        }
    }
    model.generate(text)
}

fn summarize_by_paragraph(
    model: &dyn GenerativeModel,
    document: &str,
    policy: SplitPolicy,
) -> Result<String, SummarizeError> {
    let mut partials: Vec<String> = Vec::new();

    for paragraph in document.split('\n').filter(|p| !p.trim().is_empty()) {
        match attempt(model, paragraph) {
            Ok(summary) => partials.push(summary),
            Err(GenerateError::LengthExceeded) => {
                debug!(
                    len = paragraph.len(),
                    "paragraph exceeds model budget, retrying per sentence segment"
                );
                summarize_by_segment(model, paragraph, policy, &mut partials)?;
            }
            Err(GenerateError::Backend(e)) => return Err(SummarizeError::Backend(e)),
        }
    }

    Ok(partials.join("\n"))
}

/// Sentence-level fallback for a single oversized paragraph
///
/// Appends one partial summary per segment, in order. A segment that still
/// exceeds the budget is not subdivided further; the failure surfaces.
fn summarize_by_segment(
    model: &dyn GenerativeModel,
    paragraph: &str,
    policy: SplitPolicy,
    partials: &mut Vec<String>,
) -> Result<(), SummarizeError> {
    let sentences: Vec<&str> = paragraph
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    for segment in partition(&sentences, policy.segments) {
        let text = segment.join(". ");
        match attempt(model, &text) {
            Ok(summary) => partials.push(summary),
            Err(GenerateError::LengthExceeded) => return Err(SummarizeError::LengthExceeded),
            Err(GenerateError::Backend(e)) => return Err(SummarizeError::Backend(e)),
        }
    }

    Ok(())
}

/// Partition `sentences` into at most `segments` contiguous groups
///
/// Every group but the last holds `floor(n / segments)` sentences (at least
/// one); the last takes the remainder. Ten sentences in two segments come
/// out as 5 + 5.
fn partition<'a>(sentences: &'a [&'a str], segments: usize) -> Vec<&'a [&'a str]> {
    let n = sentences.len();
    if n == 0 {
        return Vec::new();
    }
    let segments = segments.max(1);
    let size = (n / segments).max(1);

    let mut groups = Vec::with_capacity(segments);
    for i in 0..segments {
        let start = i * size;
        if start >= n {
            break;
        }
        let end = if i + 1 == segments { n } else { ((i + 1) * size).min(n) };
        if end > start {
            groups.push(&sentences[start..end]);
        }
    }
    groups
}
