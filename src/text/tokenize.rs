//! Tokenizers.
use unicode_segmentation::UnicodeSegmentation;

use super::Tokenize;
use crate::error::Error;

/// Split on unicode word boundaries, keeping punctuation as separate tokens.
pub fn word_tokenize(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .filter(|w| !w.trim().is_empty())
        .map(String::from)
        .collect()
}

/// Word-boundary tokenizer.
///
/// Lowercases by default, which makes it a stand-in for uncased subword models.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    lowercase: bool,
}

impl WordTokenizer {
    pub fn cased() -> Self {
        Self { lowercase: false }
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

impl Tokenize for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, Error> {
        if self.lowercase {
            Ok(word_tokenize(&text.to_lowercase()))
        } else {
            Ok(word_tokenize(text))
        }
    }
}

/// Subword tokenizer backed by a HuggingFace `tokenizer.json` file.
#[cfg(feature = "hf-tokenizer")]
pub struct HfTokenizer {
    inner: tokenizers::Tokenizer,
}

#[cfg(feature = "hf-tokenizer")]
impl HfTokenizer {
    pub fn from_file(path: &std::path::Path) -> Result<Self, Error> {
        log::info!("loading tokenizer from {:?}", path);
        let inner = tokenizers::Tokenizer::from_file(path)?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "hf-tokenizer")]
impl Tokenize for HfTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, Error> {
        let encoding = self.inner.encode(text, false)?;
        Ok(encoding.get_tokens().to_vec())
    }
}
