//! Run configuration.
//!
//! Every tunable of the core lives here and is passed explicitly to the
//! functions that need it. A configuration can be loaded from a JSON file,
//! missing keys falling back to their defaults:
//!
//! ```json
//! {
//!     "aligner": { "delta": 3 },
//!     "classifier": { "min_bleu": 15.0, "excluded_terms": [" molecules"] },
//!     "post_filter": { "std_factor": 2.0 }
//! }
//! ```
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub aligner: AlignerConfig,
    pub classifier: ClassifierConfig,
    pub post_filter: PostFilterConfig,
    /// Prefix used to build a human-readable link to a revision diff.
    pub revision_url_prefix: String,
}

impl Config {
    /// Load a configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        let config: Config = serde_json::from_reader(BufReader::new(f))?;
        debug!("loaded config from {:?}: {:?}", path, config);
        Ok(config)
    }

    pub fn revision_url(&self, revision_id: &str) -> String {
        format!("{}{}", self.revision_url_prefix, revision_id)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aligner: AlignerConfig::default(),
            classifier: ClassifierConfig::default(),
            post_filter: PostFilterConfig::default(),
            revision_url_prefix: "https://nl.wikipedia.org/wiki/?diff=".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignerConfig {
    /// Half-width of the search window around a prior sentence index.
    pub delta: usize,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self { delta: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub min_bleu: f64,
    pub min_levenshtein: usize,
    /// Maximum fraction of prior tokens that may be marked as changed.
    pub max_changed_ratio: f64,
    /// Substrings that disqualify an otherwise accepted prior sentence.
    pub excluded_terms: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_bleu: 15.0,
            min_levenshtein: 4,
            max_changed_ratio: 0.5,
            excluded_terms: Vec::new(),
        }
    }
}

/// Example fields that can take part in the deduplication key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupField {
    RevisionId,
    PriorSentenceRaw,
    PriorSentenceTokens,
    PostSentenceRaw,
    PostSentenceTokens,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostFilterConfig {
    pub dedup_fields: Vec<DedupField>,
    pub separator: String,
    /// Number of standard deviations tolerated around the mean length ratio.
    pub std_factor: f64,
}

impl Default for PostFilterConfig {
    fn default() -> Self {
        Self {
            dedup_fields: vec![
                DedupField::RevisionId,
                DedupField::PriorSentenceRaw,
                DedupField::PostSentenceRaw,
            ],
            separator: "\t".to_string(),
            std_factor: 2.0,
        }
    }
}
