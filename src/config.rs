//! Configuration for the summarization service
//!
//! Defines the `docsum.toml` schema: which generative model the repository
//! should acquire, an optional token-budget override for runtimes that do
//! not report theirs, and the driver's split policy.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::driver::SplitPolicy;

/// Default generative model; the summarization pipeline loads this when no
/// model is named. Pinned explicitly to remove ambiguity.
pub const DEFAULT_GENERATIVE_MODEL: &str = "sshleifer/distilbart-cnn-12-6";

/// Runtime configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Model identifier for the generative summarizer
    #[serde(default = "default_generative_model")]
    pub generative_model: String,

    /// Input-token budget override, for runtimes that do not report one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_budget: Option<usize>,

    /// Sentence segments per oversized paragraph in the driver's fallback
    #[serde(default = "default_split_segments")]
    pub split_segments: usize,
}

fn default_generative_model() -> String {
    DEFAULT_GENERATIVE_MODEL.to_string()
}

fn default_split_segments() -> usize {
    2
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            generative_model: default_generative_model(),
            token_budget: None,
            split_segments: default_split_segments(),
        }
    }
}

impl SummarizerConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read summarizer config: {:?}", path))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse summarizer config: {:?}", path))?;
        Ok(config)
    }

    /// Load from the default location (./docsum.toml) or return defaults
    pub fn load_default() -> Result<Self> {
        let local_path = Path::new("docsum.toml");
        if local_path.exists() {
            return Self::load(local_path);
        }
        Ok(Self::default())
    }

    /// Save config to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The driver split policy this configuration selects
    pub fn split_policy(&self) -> SplitPolicy {
        SplitPolicy {
            segments: self.split_segments,
        }
    }
}
