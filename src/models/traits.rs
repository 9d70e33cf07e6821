//! Model adapter abstraction
//!
//! Defines a common interface for all summarization models, enabling a host
//! application (e.g. a selection UI) to load and invoke structurally
//! different pipelines identically and to cache the expensive parts.
//!
//! The split between [`SummarizationStrategy::load`] and
//! [`SummarizationStrategy::summarize`] is deliberate: loading is a
//! coarse-grained, blocking acquisition the caller memoizes once per session,
//! while summarize is a pure function of `(document, handle)` that may be
//! called repeatedly, with different documents, against the same handle.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use thiserror::Error;

/// Resource acquisition failure during model load
///
/// Raised when the underlying runtime cannot be obtained (network
/// unavailable, model artifact missing). Never recovered at this layer;
/// it propagates to the caller.
#[derive(Debug, Error)]
#[error("failed to acquire model for adapter `{adapter}`")]
pub struct LoadError {
    /// Name of the adapter whose load failed
    pub adapter: String,
    #[source]
    pub source: anyhow::Error,
}

impl LoadError {
    pub fn new(adapter: impl Into<String>, source: anyhow::Error) -> Self {
        Self {
            adapter: adapter.into(),
            source,
        }
    }
}

/// Failure of a single generation pass on a fixed-budget model
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The input surpassed the model's token-processing budget.
    ///
    /// This is the signal the bounded-input driver recovers from by
    /// re-chunking; everything else aborts the call.
    #[error("input exceeds the model's token budget")]
    LengthExceeded,

    /// Any other runtime failure, opaque to this crate.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Failure of an adapter's summarize call
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Input still exceeds the model budget after sentence-level splitting.
    ///
    /// Only surfaced when the driver's recovery chain is exhausted.
    #[error("input exceeds the model's token budget even after splitting")]
    LengthExceeded,

    /// The handle was produced by a different adapter's load.
    #[error("model handle does not belong to adapter `{adapter}`")]
    HandleMismatch { adapter: &'static str },

    /// Opaque runtime failure, propagated to the caller untouched.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Opaque model resource returned by [`SummarizationStrategy::load`]
///
/// The internal shape (a generative pipeline, a sentence classifier, a graph
/// ranker) is private to the adapter that created it; callers hold the handle
/// for the duration of a session and pass it back to `summarize` unchanged.
/// Handles are cheap to clone and are never mutated by summarize calls, so a
/// single handle is safe to share across repeated (or parallel) requests.
#[derive(Clone)]
pub struct ModelHandle {
    inner: Arc<dyn Any + Send + Sync>,
}

impl ModelHandle {
    /// Wrap an adapter-specific resource in an opaque handle
    pub fn new<T: Send + Sync + 'static>(resource: T) -> Self {
        Self {
            inner: Arc::new(resource),
        }
    }

    /// Recover the typed resource, if this handle holds a `T`
    ///
    /// Adapters use this to unwrap their own handles; a `None` here means the
    /// handle holds an incompatible kind of resource. The type check alone
    /// cannot distinguish two adapters wrapping the same resource type, so
    /// strategies whose runtimes share a shape additionally tag the wrapped
    /// resource with the adapter that loaded it.
    pub fn downcast_ref<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ModelHandle(..)")
    }
}

/// A length-constrained generative summarizer (external collaborator)
///
/// The runtime behind this trait generates summary text token by token and
/// accepts inputs only up to an internal token budget. Implementations must
/// return decoded text with tokenization whitespace cleaned up; raw tensor
/// output is never surfaced.
pub trait GenerativeModel: Send + Sync {
    /// Summarize `text` in a single pass
    ///
    /// Returns [`GenerateError::LengthExceeded`] when the input surpasses the
    /// model's budget (observable in some runtimes only as an empty
    /// generation result).
    fn generate(&self, text: &str) -> Result<String, GenerateError>;

    /// The model's input-token budget, when the runtime exposes one
    ///
    /// Runtimes that report a budget let the driver check input length up
    /// front instead of paying for a doomed generation pass.
    fn token_budget(&self) -> Option<usize> {
        None
    }

    /// Approximate token count used for proactive budget checks
    ///
    /// Heuristic: ~4 non-whitespace characters per token.
    fn count_tokens(&self, text: &str) -> usize {
        approx_tokens(text)
    }
}

/// Approximate token count (fast)
pub fn approx_tokens(text: &str) -> usize {
    let non_ws = text.chars().filter(|c| !c.is_whitespace()).count();
    if non_ws == 0 {
        return 0;
    }
    ((non_ws as f32) / 4.0).ceil() as usize
}

/// An extractive summarization pipeline (external collaborator)
///
/// Covers the sentence-scoring classifier and both graph-ranking variants.
/// These models select sentences from the source rather than generating
/// text, and have no fixed-budget failure mode in this contract.
pub trait ExtractivePipeline: Send + Sync {
    fn summarize(&self, document: &str) -> anyhow::Result<String>;
}

/// Source of model runtimes (external collaborator)
///
/// One loader per runtime kind. Loads may block for a long duration
/// (network fetch, device placement) and are treated as idempotent; the
/// caller invokes each at most once per session via the owning adapter.
pub trait ModelRepository: Send + Sync {
    /// The generative sequence-to-sequence summarizer
    fn generative(&self) -> anyhow::Result<Arc<dyn GenerativeModel>>;

    /// The fine-tuned sentence-scoring classifier
    fn sentence_classifier(&self) -> anyhow::Result<Arc<dyn ExtractivePipeline>>;

    /// The word-level graph-ranking pipeline
    fn word_graph_ranker(&self) -> anyhow::Result<Arc<dyn ExtractivePipeline>>;

    /// The sentence-level graph-ranking pipeline over sentence embeddings
    fn sentence_graph_ranker(&self) -> anyhow::Result<Arc<dyn ExtractivePipeline>>;
}

/// Unified trait for summarization strategies
///
/// The strategy owns the *how* (which runtime to pull from the repository,
/// how to drive it); the [`ModelAdapter`] wrapping it owns identity and
/// display metadata. `summarize` must not depend on or mutate any state
/// beyond its two arguments.
pub trait SummarizationStrategy: Send + Sync {
    /// Acquire the model and wrap it in an opaque handle
    fn load(&self) -> Result<ModelHandle, LoadError>;

    /// Produce a summary of `document` using a previously loaded handle
    fn summarize(&self, document: &str, handle: &ModelHandle) -> Result<String, SummarizeError>;
}

/// Uniform descriptor binding a model's capabilities and display metadata
///
/// Immutable value object. Identity is the `name` field alone: two adapters
/// constructed with the same name compare equal and hash identically, so a
/// host can key caches of loaded handles and generated summaries on the
/// adapter even when the descriptor is reconstructed across process
/// invocations. Consequently, registered names must be unique.
#[derive(Clone)]
pub struct ModelAdapter {
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
    strategy: Arc<dyn SummarizationStrategy>,
}

impl ModelAdapter {
    pub fn new(
        name: &'static str,
        display_name: &'static str,
        description: &'static str,
        strategy: Arc<dyn SummarizationStrategy>,
    ) -> Self {
        Self {
            name,
            display_name,
            description,
            strategy,
        }
    }

    /// Short, stable identifier; the sole cache/hash key
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Human-facing name for the model selection UI
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Long-form, markdown-formatted description for display
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Acquire this adapter's model (expensive; memoize per session)
    pub fn load(&self) -> Result<ModelHandle, LoadError> {
        self.strategy.load()
    }

    /// Summarize `document` with a handle from this adapter's `load`
    pub fn summarize(
        &self,
        document: &str,
        handle: &ModelHandle,
    ) -> Result<String, SummarizeError> {
        self.strategy.summarize(document, handle)
    }
}

impl PartialEq for ModelAdapter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ModelAdapter {}

impl Hash for ModelAdapter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for ModelAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelAdapter")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}
