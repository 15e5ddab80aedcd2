//! Keep/discard decision for an aligned sentence pair.
//!
//! An exact match is always kept, unlabeled.
//! Otherwise four criteria are evaluated, and the pair is kept if at least one of them holds:
//!
//! - `min_bleu`: BLEU score is at least [ClassifierConfig::min_bleu],
//! - `not_punctuation_only`: the changed tokens contain a lowercase letter,
//! - `min_levenshtein`: tokenized sentences are at least [ClassifierConfig::min_levenshtein] edits apart,
//! - `min_similarity`: at most [ClassifierConfig::max_changed_ratio] of the prior tokens changed.
//!
//! Kept pairs whose prior sentence contains an excluded term are then rejected.
use std::fmt;

use log::info;
use serde::Serialize;

use super::diff::{changed_text, diff, is_single_word_edit, token_labels};
use super::levenshtein::levenshtein;
use crate::config::ClassifierConfig;
use crate::error::Error;
use crate::text::word_tokenize;

/// The raw and tokenized texts of an aligned pair, with its alignment score.
///
/// Tokenized texts are whitespace-separated tokens.
#[derive(Debug, Clone, Copy)]
pub struct SentencePair<'a> {
    pub prior_raw: &'a str,
    pub prior_tokens: &'a str,
    pub post_raw: &'a str,
    pub post_tokens: &'a str,
    pub bleu_score: f64,
}

impl<'a> SentencePair<'a> {
    pub fn is_exact_match(&self) -> bool {
        self.bleu_score == 100.0 || self.prior_raw == self.post_raw
    }
}

/// Outcome of each acceptance criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Criteria {
    pub min_bleu: bool,
    pub not_punctuation_only: bool,
    pub min_levenshtein: bool,
    pub min_similarity: bool,
}

impl Criteria {
    pub fn any(&self) -> bool {
        self.min_bleu || self.not_punctuation_only || self.min_levenshtein || self.min_similarity
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// None of the criteria holds.
    FailedCriteria(Criteria),
    /// The prior sentence contains this excluded term.
    ExcludedTerm(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::FailedCriteria(c) => write!(f, "failed all criteria ({:?})", c),
            Rejection::ExcludedTerm(t) => write!(f, "excluded term {:?}", t),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted {
        /// `None` for exact matches.
        is_word_edit: Option<bool>,
        /// One label per prior token, `None` for exact matches.
        token_labels: Option<Vec<u8>>,
    },
    Rejected {
        reason: Rejection,
    },
}

impl Decision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditClassifier {
    config: ClassifierConfig,
}

impl EditClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a sentence pair.
    ///
    /// Rejections are regular outcomes. An error is only returned when the token mask does not match
    /// the prior tokens, which is a logic defect.
    pub fn classify(&self, pair: &SentencePair) -> Result<Decision, Error> {
        if pair.is_exact_match() {
            return Ok(Decision::Accepted {
                is_word_edit: None,
                token_labels: None,
            });
        }

        let prior_tokens: Vec<&str> = pair.prior_tokens.split_whitespace().collect();
        let post_tokens: Vec<&str> = pair.post_tokens.split_whitespace().collect();

        let token_diff = diff(&prior_tokens, &post_tokens);
        let labels = token_labels(&token_diff);
        if labels.len() != prior_tokens.len() {
            return Err(Error::Invariant(format!(
                "token mask has {} labels for {} prior tokens",
                labels.len(),
                prior_tokens.len()
            )));
        }

        let criteria = self.criteria(pair, &labels, &changed_text(&token_diff));
        if !criteria.any() {
            return Ok(self.reject(Rejection::FailedCriteria(criteria)));
        }

        if let Some(term) = self
            .config
            .excluded_terms
            .iter()
            .find(|term| pair.prior_raw.contains(term.as_str()))
        {
            return Ok(self.reject(Rejection::ExcludedTerm(term.clone())));
        }

        let word_diff = diff(&word_tokenize(pair.prior_raw), &word_tokenize(pair.post_raw));

        Ok(Decision::Accepted {
            is_word_edit: Some(is_single_word_edit(&word_diff)),
            token_labels: Some(labels),
        })
    }

    fn criteria(&self, pair: &SentencePair, labels: &[u8], changed: &str) -> Criteria {
        let nb_changed = labels.iter().filter(|l| **l == 1).count();
        let min_similarity = !labels.is_empty()
            && nb_changed as f64 / labels.len() as f64 <= self.config.max_changed_ratio;

        Criteria {
            min_bleu: pair.bleu_score >= self.config.min_bleu,
            not_punctuation_only: changed.chars().any(char::is_lowercase),
            min_levenshtein: levenshtein(pair.prior_tokens, pair.post_tokens)
                >= self.config.min_levenshtein,
            min_similarity,
        }
    }

    fn reject(&self, reason: Rejection) -> Decision {
        info!("rejected pair: {}", reason);
        Decision::Rejected { reason }
    }
}
