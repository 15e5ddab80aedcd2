//! Revision diff to examples.
//!
//! The modified chunks of each side are sanitized and joined, split into sentences,
//! tokenized, then aligned and classified sentence by sentence.
use itertools::Itertools;
use log::{debug, info};

use crate::alignment::Aligner;
use crate::classification::{Decision, EditClassifier, Example, SentencePair};
use crate::config::Config;
use crate::error::Error;
use crate::revision::RevisionDiff;
use crate::text::{Sanitize, TextTools};

/// Build the examples of a revision.
///
/// Zero, one or many examples can be produced.
/// Errors only come from the tokenizer, or from a broken invariant in the classifier.
pub fn prepare_revision(
    diff: &RevisionDiff,
    tools: &TextTools,
    config: &Config,
) -> Result<Vec<Example>, Error> {
    let revision_id = diff.revision_id.as_str();

    if diff.prior.is_empty() || diff.post.is_empty() {
        info!("[{}] empty revision", revision_id);
    }

    if diff.has_non_edit_chunks() {
        info!("[{}] non-edit chunks", revision_id);
    }

    if diff.prior.len() > 1 || diff.post.len() > 1 {
        info!("[{}] multiple edits", revision_id);
    }

    let prior_text = sanitize_chunks(&diff.prior, tools.sanitizer.as_ref());
    let post_text = sanitize_chunks(&diff.post, tools.sanitizer.as_ref());

    if prior_text.is_empty() || post_text.is_empty() {
        info!("[{}] failed cleaning", revision_id);
    }

    let prior_raw = tools.splitter.split(&prior_text);
    let post_raw = tools.splitter.split(&post_text);
    debug!("[{}] prior sentences: {:?}", revision_id, prior_raw);
    debug!("[{}] post sentences: {:?}", revision_id, post_raw);

    if prior_raw.len() != post_raw.len() {
        info!("[{}] edit changed number of sentences", revision_id);
    }

    let prior_tokens = tokenize_all(&prior_raw, tools)?;
    let post_tokens = tokenize_all(&post_raw, tools)?;

    let aligner = Aligner::from_config(&config.aligner);
    let classifier = EditClassifier::new(config.classifier.clone());

    let mut examples = Vec::new();
    for pair in aligner.align(&prior_tokens, &post_tokens) {
        let sentences = SentencePair {
            prior_raw: &prior_raw[pair.prior_index],
            prior_tokens: &prior_tokens[pair.prior_index],
            post_raw: &post_raw[pair.post_index],
            post_tokens: &post_tokens[pair.post_index],
            bleu_score: pair.bleu_score,
        };

        match classifier.classify(&sentences)? {
            Decision::Accepted {
                is_word_edit,
                token_labels,
            } => examples.push(Example::new(
                revision_id,
                &sentences,
                is_word_edit,
                token_labels,
            )),
            Decision::Rejected { reason } => {
                info!("[{}] not keeping pair: {}", revision_id, reason)
            }
        }
    }

    Ok(examples)
}

/// Sanitize chunks and join the non-empty ones with a space.
fn sanitize_chunks(chunks: &[String], sanitizer: &dyn Sanitize) -> String {
    chunks
        .iter()
        .map(|chunk| sanitizer.sanitize(chunk))
        .filter(|text| !text.is_empty())
        .join(" ")
}

fn tokenize_all(sentences: &[String], tools: &TextTools) -> Result<Vec<String>, Error> {
    sentences
        .iter()
        .map(|s| tools.subword.tokenize_joined(s))
        .collect()
}
