//! Summarization model adapters
//!
//! Provides a uniform descriptor over the different summarization
//! strategies:
//! - neural abstractive (generative, driven through the bounded-input driver)
//! - neural extractive (sentence-scoring classifier)
//! - classic extractive (word-level graph ranking)
//! - hybrid extractive (sentence-level graph ranking)

pub mod abstractive;
pub mod extractive;
pub mod registry;
pub mod traits;

pub use abstractive::AbstractiveStrategy;
pub use extractive::{ExtractiveKind, ExtractiveStrategy};
pub use registry::{catalog, registry, registry_with, CatalogEntry};
pub use traits::{
    approx_tokens, ExtractivePipeline, GenerateError, GenerativeModel, LoadError, ModelAdapter,
    ModelHandle, ModelRepository, SummarizationStrategy, SummarizeError,
};
