//! Sentence splitting.
//!
//! Unicode sentence boundaries (UAX #29) never break before a lowercase letter,
//! which is exactly what sanitized (lowercased) text looks like.
//! [SentenceSplitter] refines those boundaries by also breaking after a sentence terminator followed by
//! whitespace, unless the terminated word is a known abbreviation or a single letter.
use std::collections::HashSet;
use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// Dutch abbreviations that end with a period.
const ABBREVIATIONS: &[&str] = &[
    "bijv.", "bv.", "o.a.", "e.a.", "e.d.", "enz.", "etc.", "ca.", "dhr.", "mevr.", "mr.", "dr.",
    "prof.", "ir.", "ing.", "drs.", "st.", "nl.", "zgn.", "m.b.t.", "t.a.v.", "i.p.v.", "a.d.",
    "n.a.v.", "v.chr.", "n.chr.", "jr.", "sr.", "nr.", "blz.", "resp.", "vs.",
];

#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    abbreviations: HashSet<String>,
}

impl SentenceSplitter {
    pub fn with_abbreviations<'a>(abbreviations: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            abbreviations: abbreviations.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// Byte ranges of the sentences of `text`.
    ///
    /// Ranges are contiguous and cover the whole text:
    /// trailing whitespace belongs to the sentence it follows.
    pub fn split_indices(&self, text: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        for (offset, sentence) in text.split_sentence_bound_indices() {
            let mut start = offset;
            for split in self.inner_splits(sentence) {
                ranges.push(start..offset + split);
                start = offset + split;
            }
            ranges.push(start..offset + sentence.len());
        }
        ranges
    }

    /// Trimmed, non-empty sentences, with `'` removed.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.split_indices(text)
            .into_iter()
            .map(|r| text[r].replace('\'', "").trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Additional split points (relative byte offsets) inside a unicode sentence.
    fn inner_splits(&self, sentence: &str) -> Vec<usize> {
        let chars: Vec<(usize, char)> = sentence.char_indices().collect();
        let mut splits = Vec::new();
        let mut idx = 0;

        while idx < chars.len() {
            let (pos, c) = chars[idx];
            if !is_terminator(c) {
                idx += 1;
                continue;
            }

            // swallow repeated terminators and closing punctuation
            let mut end = idx + 1;
            while end < chars.len() && (is_terminator(chars[end].1) || is_closing(chars[end].1)) {
                end += 1;
            }

            // require whitespace after the terminator
            let mut next = end;
            while next < chars.len() && chars[next].1.is_whitespace() {
                next += 1;
            }

            if next > end && next < chars.len() && !self.is_abbreviation(&sentence[..=pos]) {
                splits.push(chars[next].0);
            }
            idx = next.max(idx + 1);
        }

        splits
    }

    /// Checks the word ending at the end of `head`.
    fn is_abbreviation(&self, head: &str) -> bool {
        let word = head
            .rsplit(|c: char| c.is_whitespace() || c == '(')
            .next()
            .unwrap_or(head)
            .to_lowercase();

        if !word.ends_with('.') {
            return false;
        }

        let stem = &word[..word.len() - 1];
        stem.chars().count() == 1 && stem.chars().all(char::is_alphabetic)
            || self.abbreviations.contains(&word)
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::with_abbreviations(ABBREVIATIONS.iter().copied())
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, ')' | ']' | '"' | '\'' | '»' | '”')
}
