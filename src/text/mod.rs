/*! Text utilities

Sanitization (markup to plain text), tokenization and sentence splitting.

Both [Sanitize] and [Tokenize] are traits: the core only relies on their contracts,
and implementations are loaded once and then shared read-only between workers
(hence the `Sync` bounds in [TextTools]).
!*/
mod sanitize;
mod sentences;
mod tokenize;

pub use sanitize::{clean_wiki_text, fold_accents, WikiSanitizer};
pub use sentences::SentenceSplitter;
#[cfg(feature = "hf-tokenizer")]
pub use tokenize::HfTokenizer;
pub use tokenize::{word_tokenize, WordTokenizer};

use crate::error::Error;

/// Markup to plain text.
pub trait Sanitize {
    fn sanitize(&self, text: &str) -> String;
}

/// Text to tokens.
pub trait Tokenize {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, Error>;

    /// Tokenize and join tokens with a single space.
    fn tokenize_joined(&self, text: &str) -> Result<String, Error> {
        Ok(self.tokenize(text.trim())?.join(" "))
    }
}

/// The text services a run works with.
///
/// - `sanitizer`/`splitter`/`subword` are used when aligning sentences,
/// - `span_sanitizer`/`word_tokenizer` when annotating spans.
pub struct TextTools {
    pub sanitizer: Box<dyn Sanitize + Sync + Send>,
    pub span_sanitizer: Box<dyn Sanitize + Sync + Send>,
    pub splitter: SentenceSplitter,
    pub word_tokenizer: Box<dyn Tokenize + Sync + Send>,
    pub subword: Box<dyn Tokenize + Sync + Send>,
}

impl TextTools {
    /// Swap the subword tokenizer.
    pub fn with_subword(mut self, subword: Box<dyn Tokenize + Sync + Send>) -> Self {
        self.subword = subword;
        self
    }
}

impl Default for TextTools {
    fn default() -> Self {
        Self {
            sanitizer: Box::new(WikiSanitizer::default()),
            span_sanitizer: Box::new(WikiSanitizer::without_periods()),
            splitter: SentenceSplitter::default(),
            word_tokenizer: Box::new(WordTokenizer::cased()),
            subword: Box::new(WordTokenizer::default()),
        }
    }
}
