//! Sentence-level BLEU.
//!
//! Used as a matching heuristic between two versions of a sentence,
//! not as a translation metric: there is no smoothing, any missing n-gram order yields 0.
use std::collections::HashMap;

/// Highest n-gram order.
const MAX_ORDER: usize = 4;

/// BLEU score of `hyp` against `reference`, in `[0, 100]`.
///
/// Score is 0 if either side is empty or if any n-gram order (1 to 4) has no match
/// (which includes sentences shorter than 4 tokens).
pub fn bleu(hyp: &[&str], reference: &[&str]) -> f64 {
    let c = hyp.len();
    let r = reference.len();
    if c == 0 || r == 0 {
        return 0.0;
    }

    let mut log_precision = 0.0;
    for n in 1..=MAX_ORDER {
        let total = (c + 1).saturating_sub(n);
        let matches = clipped_matches(hyp, reference, n);
        if total == 0 || matches == 0 {
            return 0.0;
        }
        log_precision += (matches as f64 / total as f64).ln();
    }
    log_precision /= MAX_ORDER as f64;

    let brevity_penalty = f64::min(0.0, 1.0 - r as f64 / c as f64);

    100.0 * (brevity_penalty + log_precision).exp()
}

/// Number of hypothesis n-grams found in the reference, each reference n-gram being usable once.
fn clipped_matches(hyp: &[&str], reference: &[&str], n: usize) -> usize {
    let reference_counts = ngram_counts(reference, n);
    ngram_counts(hyp, n)
        .into_iter()
        .map(|(ngram, count)| count.min(reference_counts.get(ngram).copied().unwrap_or(0)))
        .sum()
}

fn ngram_counts<'a, 'b>(tokens: &'a [&'b str], n: usize) -> HashMap<&'a [&'b str], usize> {
    let mut counts = HashMap::new();
    for ngram in tokens.windows(n) {
        *counts.entry(ngram).or_insert(0) += 1;
    }
    counts
}
