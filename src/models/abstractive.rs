//! Neural abstractive strategy
//!
//! Wraps the generative sequence-to-sequence runtime behind the adapter
//! contract. Loading pulls the model from the repository; summarization runs
//! the bounded-input driver so documents of any length come back with a
//! summary despite the model's fixed token budget.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::driver::{summarize_bounded_with, SplitPolicy};

use super::traits::{
    GenerativeModel, LoadError, ModelHandle, ModelRepository, SummarizationStrategy,
    SummarizeError,
};

/// Strategy driving a length-constrained generative summarizer
pub struct AbstractiveStrategy {
    adapter: &'static str,
    repo: Arc<dyn ModelRepository>,
    policy: SplitPolicy,
}

impl AbstractiveStrategy {
    pub fn new(adapter: &'static str, repo: Arc<dyn ModelRepository>, policy: SplitPolicy) -> Self {
        Self {
            adapter,
            repo,
            policy,
        }
    }
}

impl SummarizationStrategy for AbstractiveStrategy {
    fn load(&self) -> Result<ModelHandle, LoadError> {
        let start = Instant::now();
        let model = self
            .repo
            .generative()
            .map_err(|e| LoadError::new(self.adapter, e))?;
        info!(adapter = self.adapter, elapsed = ?start.elapsed(), "generative model loaded");
        Ok(ModelHandle::new(model))
    }

    fn summarize(&self, document: &str, handle: &ModelHandle) -> Result<String, SummarizeError> {
        let model = handle
            .downcast_ref::<Arc<dyn GenerativeModel>>()
            .ok_or(SummarizeError::HandleMismatch {
                adapter: self.adapter,
            })?;
        summarize_bounded_with(model.as_ref(), document, self.policy)
    }
}
