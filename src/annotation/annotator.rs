//! Container to annotated sentences.
//!
//! The container text is split into sentences while keeping track of where inline changes start and end.
//! Only sentences that contain such a change boundary are kept.
//! They are then cut at segment boundaries into spans, labeled [CHANGED] when they come from an
//! inline change of the prior side.
//!
//! Post-side spans are always labeled [UNCHANGED]: only removed text counts as a biased span.
use std::ops::Range;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::sentence::Sentence;
use super::span::{Span, CHANGED, UNCHANGED};
use crate::error::Error;
use crate::extraction::{Container, Segment, Side};
use crate::text::{Sanitize, SentenceSplitter, TextTools, Tokenize};

lazy_static! {
    static ref IMAGE_REFERENCE: Regex = Regex::new(r"(?i)\.(jpe?g|svg|png)\b").unwrap();
}

/// `true` if the sentence refers to an image file.
pub fn contains_image_reference(text: &str) -> bool {
    IMAGE_REFERENCE.is_match(text)
}

pub struct Annotator<'a> {
    sanitizer: &'a dyn Sanitize,
    tokenizer: &'a dyn Tokenize,
    splitter: &'a SentenceSplitter,
}

impl<'a> Annotator<'a> {
    pub fn new(
        sanitizer: &'a dyn Sanitize,
        tokenizer: &'a dyn Tokenize,
        splitter: &'a SentenceSplitter,
    ) -> Self {
        Self {
            sanitizer,
            tokenizer,
            splitter,
        }
    }

    pub fn from_tools(tools: &'a TextTools) -> Self {
        Self::new(
            tools.span_sanitizer.as_ref(),
            tools.word_tokenizer.as_ref(),
            &tools.splitter,
        )
    }

    /// Annotate a container.
    ///
    /// Containers without inline change yield no sentence.
    pub fn annotate(&self, container: &Container, revision_id: &str) -> Result<Vec<Sentence>, Error> {
        if !container.has_inline_change() {
            debug!("[{}] no inline change, nothing to annotate", revision_id);
            return Ok(Vec::new());
        }

        self.annotate_segments(container.segments(), container.side(), revision_id)
    }

    /// Annotate raw segments.
    pub fn annotate_segments(
        &self,
        segments: &[Segment],
        side: Side,
        revision_id: &str,
    ) -> Result<Vec<Sentence>, Error> {
        let layout = Layout::new(segments);
        let mut sentences = Vec::new();

        for range in self.splitter.split_indices(&layout.text) {
            if !layout.has_change_boundary(&range) {
                continue;
            }

            if contains_image_reference(&layout.text[range.clone()]) {
                debug!("[{}] ignoring image reference", revision_id);
                continue;
            }

            let mut spans = Vec::new();
            for (piece, is_changed) in layout.pieces(&range) {
                let label = if is_changed && !side.is_post() {
                    CHANGED
                } else {
                    UNCHANGED
                };

                if let Some(span) = self.build_span(&layout.text[piece], label)? {
                    spans.push(span);
                }
            }

            if spans.is_empty() {
                continue;
            }

            sentences.push(Sentence::new(spans, revision_id.to_string(), side));
        }

        Ok(sentences)
    }

    /// Sanitize and tokenize a span, discarding it if no text remains.
    fn build_span(&self, raw: &str, label: u8) -> Result<Option<Span>, Error> {
        let text = self.sanitizer.sanitize(&raw.replace('\n', " "));
        if text.trim().is_empty() {
            return Ok(None);
        }

        let tokens = self.tokenizer.tokenize(&text)?;
        Ok(Some(Span::new(text, tokens, label)))
    }
}

/// Plain text of a segment list along with segment byte ranges.
struct Layout {
    text: String,
    segments: Vec<(Range<usize>, bool)>,
}

impl Layout {
    fn new(segments: &[Segment]) -> Self {
        let mut text = String::new();
        let mut ranges = Vec::with_capacity(segments.len());
        for segment in segments {
            let start = text.len();
            text.push_str(segment.text());
            ranges.push((start..text.len(), segment.is_changed()));
        }

        Self {
            text,
            segments: ranges,
        }
    }

    /// Offsets where an inline change starts or ends.
    fn change_boundaries(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments
            .iter()
            .filter(|(_, is_changed)| *is_changed)
            .flat_map(|(r, _)| [r.start, r.end])
    }

    /// A boundary belongs to the sentence that starts at or before it.
    /// A boundary at the very end of the text belongs to the last sentence.
    fn has_change_boundary(&self, sentence: &Range<usize>) -> bool {
        let len = self.text.len();
        self.change_boundaries().any(|b| {
            (sentence.start <= b && b < sentence.end) || (b == sentence.end && b == len)
        })
    }

    /// Cut a sentence range at segment boundaries.
    fn pieces(&self, sentence: &Range<usize>) -> Vec<(Range<usize>, bool)> {
        self.segments
            .iter()
            .filter_map(|(r, is_changed)| {
                let start = r.start.max(sentence.start);
                let end = r.end.min(sentence.end);
                if start < end {
                    Some((start..end, *is_changed))
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::sentence::LabelRange;

    fn segments() -> Vec<Segment> {
        vec![
            Segment::unchanged("Het weer is mooi. Hij is een "),
            Segment::changed("zeer beroemde"),
            Segment::unchanged(" schrijver. Dat klopt."),
        ]
    }

    #[test]
    fn prior_side() {
        let tools = TextTools::default();
        let a = Annotator::from_tools(&tools);
        let sentences = a.annotate_segments(&segments(), Side::Prior, "7").unwrap();

        assert_eq!(sentences.len(), 1);
        let s = &sentences[0];
        assert_eq!(s.text(), "hij is een zeer beroemde schrijver");
        assert_eq!(s.label_mask(), vec![0, 0, 0, 1, 1, 0]);
        assert_eq!(s.label_ranges(), vec![LabelRange { start: 11, end: 24 }]);
        assert_eq!(s.side(), Side::Prior);
    }

    #[test]
    fn post_side_is_unlabeled() {
        let tools = TextTools::default();
        let a = Annotator::from_tools(&tools);
        let sentences = a.annotate_segments(&segments(), Side::Post, "7").unwrap();

        assert_eq!(sentences.len(), 1);
        assert!(sentences[0].label_mask().iter().all(|l| *l == 0));
        assert!(sentences[0].label_ranges().is_empty());
    }

    #[test]
    fn change_at_end_of_text() {
        let tools = TextTools::default();
        let a = Annotator::from_tools(&tools);
        let segs = vec![
            Segment::unchanged("Eerste zin. Tweede "),
            Segment::changed("zin"),
        ];
        let sentences = a.annotate_segments(&segs, Side::Prior, "1").unwrap();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text(), "tweede zin");
    }

    #[test]
    fn image_sentences_dropped() {
        let tools = TextTools::default();
        let a = Annotator::from_tools(&tools);
        let segs = vec![
            Segment::unchanged("[[Bestand:Kat.jpg|thumb|een "),
            Segment::changed("mooie"),
            Segment::unchanged(" kat]]"),
        ];
        assert!(a.annotate_segments(&segs, Side::Prior, "1").unwrap().is_empty());
    }

    #[test]
    fn no_inline_change() {
        let tools = TextTools::default();
        let a = Annotator::from_tools(&tools);
        let c = Container::new(Side::Prior, vec![Segment::unchanged("Geen wijziging hier.")]);
        assert!(a.annotate(&c, "1").unwrap().is_empty());
    }

    #[test]
    fn punctuation_only_span_dropped() {
        let tools = TextTools::default();
        let a = Annotator::from_tools(&tools);
        let segs = vec![
            Segment::unchanged("De kat is zwart"),
            Segment::changed(","),
            Segment::unchanged(" echt."),
        ];
        let sentences = a.annotate_segments(&segs, Side::Prior, "1").unwrap();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].spans().len(), 2);
        assert!(sentences[0].label_ranges().is_empty());
    }

    #[test]
    fn no_sentinel_leak() {
        let tools = TextTools::default();
        let a = Annotator::from_tools(&tools);
        let sentences = a.annotate_segments(&segments(), Side::Prior, "7").unwrap();
        for span in sentences.iter().flat_map(|s| s.spans()) {
            for marker in ["<SPLIT>", "<EDIT-START>", "<EDIT-END>"] {
                assert!(!span.text().contains(marker));
            }
        }
    }
}
