//! Extractive strategies
//!
//! One strategy type covers the three sentence-selecting pipelines; they
//! differ only in which runtime the repository hands back. Extractive models
//! score and select sentences rather than generating text, so there is no
//! token-budget failure mode and no driver between the adapter and the
//! pipeline.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use super::traits::{
    ExtractivePipeline, LoadError, ModelHandle, ModelRepository, SummarizationStrategy,
    SummarizeError,
};

/// Which extractive runtime a strategy pulls from the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractiveKind {
    /// Fine-tuned sentence-scoring classifier
    NeuralSentence,
    /// Word-level graph ranking (classic TextRank)
    WordGraph,
    /// Sentence-level graph ranking over sentence embeddings
    SentenceGraph,
}

/// Loaded pipeline tagged with the adapter that produced it
///
/// All three extractive runtimes share the `ExtractivePipeline` shape, so
/// the type alone cannot tell a classic handle from a hybrid one; the tag
/// binds the handle to its loading adapter.
struct LoadedPipeline {
    adapter: &'static str,
    pipeline: Arc<dyn ExtractivePipeline>,
}

/// Strategy delegating whole documents to an extractive pipeline
pub struct ExtractiveStrategy {
    adapter: &'static str,
    kind: ExtractiveKind,
    repo: Arc<dyn ModelRepository>,
}

impl ExtractiveStrategy {
    pub fn new(adapter: &'static str, kind: ExtractiveKind, repo: Arc<dyn ModelRepository>) -> Self {
        Self {
            adapter,
            kind,
            repo,
        }
    }

    pub fn kind(&self) -> ExtractiveKind {
        self.kind
    }
}

impl SummarizationStrategy for ExtractiveStrategy {
    fn load(&self) -> Result<ModelHandle, LoadError> {
        let start = Instant::now();
        let pipeline = match self.kind {
            ExtractiveKind::NeuralSentence => self.repo.sentence_classifier(),
            ExtractiveKind::WordGraph => self.repo.word_graph_ranker(),
            ExtractiveKind::SentenceGraph => self.repo.sentence_graph_ranker(),
        }
        .map_err(|e| LoadError::new(self.adapter, e))?;
        info!(adapter = self.adapter, elapsed = ?start.elapsed(), "extractive pipeline loaded");
        Ok(ModelHandle::new(LoadedPipeline {
            adapter: self.adapter,
            pipeline,
        }))
    }

    fn summarize(&self, document: &str, handle: &ModelHandle) -> Result<String, SummarizeError> {
        let loaded = handle
            .downcast_ref::<LoadedPipeline>()
            .filter(|loaded| loaded.adapter == self.adapter)
            .ok_or(SummarizeError::HandleMismatch {
                adapter: self.adapter,
            })?;
        if document.trim().is_empty() {
            return Ok(String::new());
        }
        loaded
            .pipeline
            .summarize(document)
            .map_err(SummarizeError::Backend)
    }
}
