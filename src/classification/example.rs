use serde::{Deserialize, Serialize};

use super::classifier::SentencePair;

/// A kept sentence pair, as written to the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub revision_id: String,
    pub bleu_score: f64,
    /// `None` for exact matches.
    pub is_word_edit: Option<bool>,
    /// `None` for exact matches.
    pub token_labels: Option<Vec<u8>>,
    /// Prior over post raw sentence length, in characters.
    pub length_ratio: f64,
    pub prior_sentence_raw: String,
    pub prior_sentence_tokens: String,
    pub post_sentence_raw: String,
    pub post_sentence_tokens: String,
}

impl Example {
    pub fn new(
        revision_id: &str,
        pair: &SentencePair,
        is_word_edit: Option<bool>,
        token_labels: Option<Vec<u8>>,
    ) -> Self {
        Self {
            revision_id: revision_id.to_string(),
            bleu_score: pair.bleu_score,
            is_word_edit,
            token_labels,
            length_ratio: length_ratio(pair.prior_raw, pair.post_raw),
            prior_sentence_raw: pair.prior_raw.to_string(),
            prior_sentence_tokens: pair.prior_tokens.to_string(),
            post_sentence_raw: pair.post_raw.to_string(),
            post_sentence_tokens: pair.post_tokens.to_string(),
        }
    }
}

/// Character length ratio. Infinite (or NaN) if `post` is empty.
pub fn length_ratio(prior: &str, post: &str) -> f64 {
    prior.chars().count() as f64 / post.chars().count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio() {
        assert_eq!(length_ratio("abcd", "ab"), 2.0);
        assert_eq!(length_ratio("één", "een"), 1.0);
        assert!(!length_ratio("a", "").is_finite());
    }

    #[test]
    fn serialize_nulls() {
        let pair = SentencePair {
            prior_raw: "de kat is zwart",
            prior_tokens: "de kat is zwart",
            post_raw: "de kat is zwart",
            post_tokens: "de kat is zwart",
            bleu_score: 100.0,
        };
        let e = Example::new("1", &pair, None, None);
        let json = serde_json::to_value(&e).unwrap();
        assert!(json["is_word_edit"].is_null());
        assert!(json["token_labels"].is_null());
        assert_eq!(json["length_ratio"], 1.0);

        let back: Example = serde_json::from_value(json).unwrap();
        assert_eq!(back, e);
    }
}
