//! Fixed catalog of the named summarization adapters
//!
//! The four adapters are a static enumeration: a selection UI lists them by
//! `display_name`, shows the markdown `description` under the picker, and
//! caches loaded handles and generated summaries keyed on the adapter. Names
//! are unique and stable; they are the only identity the cache ever sees.

use std::sync::Arc;

use serde::Serialize;

use crate::config::SummarizerConfig;
use crate::driver::SplitPolicy;

use super::abstractive::AbstractiveStrategy;
use super::extractive::{ExtractiveKind, ExtractiveStrategy};
use super::traits::{ModelAdapter, ModelRepository};

pub const ABSTRACTIVE: &str = "abstractive";
pub const MODERN_EXTRACTIVE: &str = "modern_extractive";
pub const CLASSIC_EXTRACTIVE: &str = "classic_extractive";
pub const HYBRID_EXTRACTIVE: &str = "hybrid_extractive";

const ABSTRACTIVE_DESCRIPTION: &str = "\
### Neural Abstractive (distilBART)
Generates a summary word by word rather than copying sentences from the \
source, using a distilled BART sequence-to-sequence model trained on the \
CNN/Daily Mail dataset. Abstractive Transformers are the current \
state of the art, with two caveats: they can only ingest a fixed number of \
tokens at a time, so long documents are summarized in chunks, and text \
generated word by word can occasionally state things the source does not.";

const MODERN_EXTRACTIVE_DESCRIPTION: &str = "\
### Neural Extractive (fine-tuned SentenceBERT)
Scores every sentence in the document with a SentenceBERT model fine-tuned \
on articles whose sentences were labeled *in summary* / *not in summary* by \
matching them against human-written highlights. Sentence and full-document \
representations feed a dense layer that produces a per-sentence score; the \
highest-scoring sentences are extracted as the summary.";

const CLASSIC_EXTRACTIVE_DESCRIPTION: &str = "\
### Classic Extractive (TextRank)
A graph-based ranking algorithm: each vertex is a word from the document \
(stop words removed), and an edge between two words counts their \
co-occurrence within a context window. Linking to a vertex is a vote for \
it, and votes from important vertices count for more, so PageRank computes \
the recursive importance of every word. Sentences containing the \
top-ranked words and phrases become the summary.";

const HYBRID_EXTRACTIVE_DESCRIPTION: &str = "\
### Hybrid Extractive (TextRank + SentenceBERT)
The same graph-ranking machinery as the classic model, with sentences as \
vertices instead of words. Each sentence is embedded with SentenceBERT and \
edges carry the cosine similarity between sentence embeddings; PageRank \
then scores whole sentences directly, and the highest-scoring ones are \
selected as the summary.";

/// The neural abstractive adapter
pub fn abstractive(repo: Arc<dyn ModelRepository>, policy: SplitPolicy) -> ModelAdapter {
    ModelAdapter::new(
        ABSTRACTIVE,
        "Neural Abstractive",
        ABSTRACTIVE_DESCRIPTION,
        Arc::new(AbstractiveStrategy::new(ABSTRACTIVE, repo, policy)),
    )
}

/// The neural extractive adapter
pub fn modern_extractive(repo: Arc<dyn ModelRepository>) -> ModelAdapter {
    ModelAdapter::new(
        MODERN_EXTRACTIVE,
        "Neural Extractive",
        MODERN_EXTRACTIVE_DESCRIPTION,
        Arc::new(ExtractiveStrategy::new(
            MODERN_EXTRACTIVE,
            ExtractiveKind::NeuralSentence,
            repo,
        )),
    )
}

/// The classic graph-based extractive adapter
pub fn classic_extractive(repo: Arc<dyn ModelRepository>) -> ModelAdapter {
    ModelAdapter::new(
        CLASSIC_EXTRACTIVE,
        "Classic Extractive",
        CLASSIC_EXTRACTIVE_DESCRIPTION,
        Arc::new(ExtractiveStrategy::new(
            CLASSIC_EXTRACTIVE,
            ExtractiveKind::WordGraph,
            repo,
        )),
    )
}

/// The hybrid extractive adapter
pub fn hybrid_extractive(repo: Arc<dyn ModelRepository>) -> ModelAdapter {
    ModelAdapter::new(
        HYBRID_EXTRACTIVE,
        "Hybrid Extractive",
        HYBRID_EXTRACTIVE_DESCRIPTION,
        Arc::new(ExtractiveStrategy::new(
            HYBRID_EXTRACTIVE,
            ExtractiveKind::SentenceGraph,
            repo,
        )),
    )
}

/// Build the full adapter registry with default settings
pub fn registry(repo: Arc<dyn ModelRepository>) -> Vec<ModelAdapter> {
    registry_with(repo, &SummarizerConfig::default())
}

/// Build the full adapter registry with settings from `config`
///
/// Panics if the registered names are not unique; duplicate names would
/// silently alias cache entries in the host application.
pub fn registry_with(repo: Arc<dyn ModelRepository>, config: &SummarizerConfig) -> Vec<ModelAdapter> {
    let adapters = vec![
        abstractive(Arc::clone(&repo), config.split_policy()),
        modern_extractive(Arc::clone(&repo)),
        classic_extractive(Arc::clone(&repo)),
        hybrid_extractive(repo),
    ];
    debug_assert!(
        {
            let mut names: Vec<_> = adapters.iter().map(ModelAdapter::name).collect();
            names.sort_unstable();
            names.windows(2).all(|w| w[0] != w[1])
        },
        "registered adapter names must be unique"
    );
    adapters
}

/// Caller-facing catalog entry for the model selection UI
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub display_name: String,
    pub description: String,
}

/// Render the registry as displayable catalog entries, in registry order
pub fn catalog(adapters: &[ModelAdapter]) -> Vec<CatalogEntry> {
    adapters
        .iter()
        .map(|a| CatalogEntry {
            name: a.name().to_string(),
            display_name: a.display_name().to_string(),
            description: a.description().to_string(),
        })
        .collect()
}
