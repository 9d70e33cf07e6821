//! Document summarization adapters
//!
//! Provides a uniform interface over heterogeneous summarization models:
//! - neural abstractive (token-by-token generation)
//! - neural extractive (sentence scoring)
//! - classic graph-based extractive (word-level TextRank)
//! - hybrid extractive (sentence-level graph ranking)
//!
//! The two pieces that live here are the [`models::ModelAdapter`] descriptor,
//! which lets a host application load and cache any of the models
//! interchangeably, and the [`driver`] module, which feeds arbitrarily long
//! documents into a generative model with a fixed input-token budget by
//! splitting at progressively finer granularity on failure.
//!
//! The inference runtimes themselves are external: they are injected through
//! the [`models::ModelRepository`] trait and never inspected by this crate.

pub mod config;
pub mod driver;
pub mod models;
