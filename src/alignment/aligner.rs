//! Windowed sentence alignment.
use log::info;
use serde::{Deserialize, Serialize};

use super::bleu::bleu;
use crate::config::AlignerConfig;

/// A prior sentence matched to a post sentence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedPair {
    pub prior_index: usize,
    pub post_index: usize,
    pub bleu_score: f64,
}

/// Matches each prior sentence to the most similar post sentence
/// among the ones with a close index.
///
/// For a prior index `i`, candidates are the post sentences in `[i - delta, i + delta)`,
/// clipped to the post sequence.
/// Several prior sentences may be matched to the same post sentence.
#[derive(Debug, Clone)]
pub struct Aligner {
    delta: usize,
}

impl Aligner {
    pub fn new(delta: usize) -> Self {
        Self { delta }
    }

    pub fn from_config(config: &AlignerConfig) -> Self {
        Self::new(config.delta)
    }

    pub fn delta(&self) -> usize {
        self.delta
    }

    /// Align two sequences of tokenized sentences (tokens separated by whitespace).
    ///
    /// At most one pair is emitted per prior index, in prior order.
    /// On equal scores the earliest post index wins.
    pub fn align<S: AsRef<str>>(&self, prior: &[S], post: &[S]) -> Vec<AlignedPair> {
        let post_tokens: Vec<Vec<&str>> = post
            .iter()
            .map(|s| s.as_ref().split_whitespace().collect())
            .collect();

        let mut pairs = Vec::with_capacity(prior.len());
        for (i, sentence) in prior.iter().enumerate() {
            let lo = i.saturating_sub(self.delta);
            let hi = usize::min(i + self.delta, post_tokens.len());

            if lo >= hi {
                info!(
                    "empty alignment window for sentence {} ({} prior, {} post sentences)",
                    i,
                    prior.len(),
                    post_tokens.len()
                );
                continue;
            }

            let hyp: Vec<&str> = sentence.as_ref().split_whitespace().collect();
            let mut best = AlignedPair {
                prior_index: i,
                post_index: lo,
                bleu_score: bleu(&hyp, &post_tokens[lo]),
            };

            for (j, reference) in post_tokens.iter().enumerate().take(hi).skip(lo + 1) {
                let score = bleu(&hyp, reference);
                if score > best.bleu_score {
                    best.post_index = j;
                    best.bleu_score = score;
                }
            }

            pairs.push(best);
        }

        pairs
    }
}

impl Default for Aligner {
    fn default() -> Self {
        Self::from_config(&AlignerConfig::default())
    }
}
