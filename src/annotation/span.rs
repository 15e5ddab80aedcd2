use serde::Serialize;

/// Label of a span that is part of an inline change.
pub const CHANGED: u8 = 1;
/// Label of an untouched span.
pub const UNCHANGED: u8 = 0;

/// A run of sanitized sentence text sharing one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    text: String,
    tokens: Vec<String>,
    label: u8,
}

impl Span {
    pub fn new(text: String, tokens: Vec<String>, label: u8) -> Self {
        Self {
            text,
            tokens,
            label,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn label(&self) -> u8 {
        self.label
    }

    pub fn is_changed(&self) -> bool {
        self.label == CHANGED
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// One label per token.
    pub fn label_mask(&self) -> Vec<u8> {
        vec![self.label; self.tokens.len()]
    }
}
