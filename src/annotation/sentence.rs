//! Annotated sentences.
use itertools::Itertools;
use serde::{Serialize, Serializer};

use super::span::Span;
use crate::extraction::Side;

/// Label used for changed character ranges.
pub const SUBJECTIVE_LABEL: &str = "SUBJ";

/// A labeled character range of a sentence text, serialized as `[start, end, "SUBJ"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelRange {
    pub start: usize,
    pub end: usize,
}

impl Serialize for LabelRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.start, self.end, SUBJECTIVE_LABEL).serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    spans: Vec<Span>,
    revision_id: String,
    side: Side,
}

impl Sentence {
    pub fn new(spans: Vec<Span>, revision_id: String, side: Side) -> Self {
        Self {
            spans,
            revision_id,
            side,
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn revision_id(&self) -> &str {
        &self.revision_id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Span texts joined by a single space.
    pub fn text(&self) -> String {
        self.spans.iter().map(Span::text).join(" ")
    }

    pub fn tokens(&self) -> Vec<String> {
        self.spans
            .iter()
            .flat_map(|span| span.tokens().iter().cloned())
            .collect()
    }

    pub fn label_mask(&self) -> Vec<u8> {
        self.spans.iter().flat_map(Span::label_mask).collect()
    }

    /// Character ranges of changed spans in [Sentence::text].
    ///
    /// Offsets account for the separator inserted between two spans.
    pub fn label_ranges(&self) -> Vec<LabelRange> {
        let mut ranges = Vec::new();
        let mut offset = 0;
        for (idx, span) in self.spans.iter().enumerate() {
            if idx > 0 {
                offset += 1;
            }

            let start = offset;
            offset += span.len();

            if span.is_changed() {
                ranges.push(LabelRange { start, end: offset });
            }
        }
        ranges
    }

    /// Build the corpus record of this sentence.
    pub fn to_record(&self, revision_url: String) -> AnnotatedSentence {
        AnnotatedSentence {
            text: self.text(),
            tokens: self.tokens(),
            labels: self.label_ranges(),
            label_masks: self.label_mask(),
            is_revision: self.side.is_post(),
            revision_id: self.revision_id.clone(),
            revision_url,
        }
    }
}

/// Corpus record for one annotated sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedSentence {
    pub text: String,
    pub tokens: Vec<String>,
    pub labels: Vec<LabelRange>,
    pub label_masks: Vec<u8>,
    pub is_revision: bool,
    pub revision_id: String,
    pub revision_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::span::{CHANGED, UNCHANGED};

    fn span(text: &str, label: u8) -> Span {
        let tokens = text.split_whitespace().map(String::from).collect();
        Span::new(text.to_string(), tokens, label)
    }

    fn sentence() -> Sentence {
        Sentence::new(
            vec![
                span("hij is een", UNCHANGED),
                span("beroemde", CHANGED),
                span("schrijver", UNCHANGED),
            ],
            "42".to_string(),
            Side::Prior,
        )
    }

    #[test]
    fn derived() {
        let s = sentence();
        assert_eq!(s.text(), "hij is een beroemde schrijver");
        assert_eq!(s.tokens().len(), 5);
        assert_eq!(s.label_mask(), vec![0, 0, 0, 1, 0]);
    }

    #[test]
    fn ranges_match_text() {
        let s = sentence();
        let ranges = s.label_ranges();
        assert_eq!(ranges, vec![LabelRange { start: 11, end: 19 }]);

        let text: Vec<char> = s.text().chars().collect();
        let labeled: String = text[ranges[0].start..ranges[0].end].iter().collect();
        assert_eq!(labeled, "beroemde");
    }

    #[test]
    fn first_span_changed() {
        let s = Sentence::new(
            vec![span("zeer", CHANGED), span("goed", UNCHANGED)],
            "1".to_string(),
            Side::Prior,
        );
        assert_eq!(s.label_ranges(), vec![LabelRange { start: 0, end: 4 }]);
    }

    #[test]
    fn record() {
        let r = sentence().to_record("https://nl.wikipedia.org/wiki/?diff=42".to_string());
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["labels"], serde_json::json!([[11, 19, "SUBJ"]]));
        assert_eq!(json["is_revision"], false);
        assert_eq!(json["revision_id"], "42");
    }
}
