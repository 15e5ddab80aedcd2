//! Inner containers of diff-table nodes.
//!
//! A container is the `<div>` inside a deleted/added line cell.
//! Its content is kept as an ordered list of [Segment]s, each flagged as
//! inline-changed or not, so that change boundaries survive sentence splitting
//! without having to be encoded into the text itself.
use scraper::{ElementRef, Node};
use serde::{Deserialize, Serialize};

/// Class carried by `<del>`/`<ins>` elements that wrap inline changes.
pub const INLINE_CHANGE_CLASS: &str = "diffchange-inline";

/// Side of a change node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// text before the edit (deleted-line cells)
    Prior,
    /// text after the edit (added-line cells)
    Post,
}

impl Side {
    /// Tag name of the elements wrapping inline changes on this side.
    pub fn inline_tag(&self) -> &'static str {
        match self {
            Side::Prior => "del",
            Side::Post => "ins",
        }
    }

    pub fn is_post(&self) -> bool {
        matches!(self, Side::Post)
    }
}

/// A contiguous run of container text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: String,
    is_changed: bool,
}

impl Segment {
    pub fn new(text: String, is_changed: bool) -> Self {
        Self { text, is_changed }
    }

    pub fn unchanged(text: &str) -> Self {
        Self::new(text.to_string(), false)
    }

    pub fn changed(text: &str) -> Self {
        Self::new(text.to_string(), true)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_changed(&self) -> bool {
        self.is_changed
    }
}

/// Content of one side of a change node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    side: Side,
    segments: Vec<Segment>,
    inline_changes: Vec<String>,
}

impl Container {
    /// Build a container straight from segments.
    ///
    /// Inline changes are derived from the changed segments.
    pub fn new(side: Side, segments: Vec<Segment>) -> Self {
        let inline_changes = segments
            .iter()
            .filter(|s| s.is_changed)
            .map(|s| normalize_whitespace(&s.text))
            .filter(|text| !text.is_empty())
            .collect();
        Self {
            side,
            segments: merge(segments),
            inline_changes,
        }
    }

    /// Build a container from a `<div>` element.
    pub fn from_element(div: ElementRef, side: Side) -> Self {
        let mut segments = Vec::new();
        collect_segments(div, side, &mut segments);

        Self {
            side,
            segments: merge(segments),
            inline_changes: inline_changes(div, side),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Inline-changed substrings found with the side's markup, whitespace-normalized.
    pub fn inline_changes(&self) -> &[String] {
        &self.inline_changes
    }

    /// `true` if the container holds at least one word-level change.
    pub fn has_inline_change(&self) -> bool {
        !self.inline_changes.is_empty()
    }

    /// Plain text of the container, trimmed.
    pub fn text(&self) -> String {
        let text: String = self.segments.iter().map(|s| s.text.as_str()).collect();
        text.trim().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.text.trim().is_empty())
    }
}

/// Find every inline-changed substring of a container element.
///
/// Only the markup of the given side is looked for
/// (`<del class="diffchange diffchange-inline">` on the prior side,
/// `<ins class="diffchange diffchange-inline">` on the post side).
pub fn inline_changes(div: ElementRef, side: Side) -> Vec<String> {
    div.descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| is_inline_change(el, side))
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect()
}

fn is_inline_change(el: &ElementRef, side: Side) -> bool {
    el.value().name() == side.inline_tag()
        && el.value().classes().any(|c| c == INLINE_CHANGE_CLASS)
}

/// Walk the element tree, flattening it into segments.
fn collect_segments(el: ElementRef, side: Side, segments: &mut Vec<Segment>) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => segments.push(Segment::unchanged(text)),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    if is_inline_change(&child_el, side) {
                        let text: String = child_el.text().collect();
                        segments.push(Segment::new(text, true));
                    } else {
                        collect_segments(child_el, side, segments);
                    }
                }
            }
            _ => (),
        }
    }
}

/// Merge adjacent segments that share the same flag, dropping empty ones.
fn merge(segments: Vec<Segment>) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments.into_iter().filter(|s| !s.text.is_empty()) {
        match merged.last_mut() {
            Some(last) if last.is_changed == segment.is_changed => last.text.push_str(&segment.text),
            _ => merged.push(segment),
        }
    }
    merged
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;

    fn first_div(html: &str) -> Html {
        Html::parse_fragment(html)
    }

    #[test]
    fn segments_prior() {
        let html = first_div(
            r#"<div>Hij is een <del class="diffchange diffchange-inline">beroemde</del> schrijver.</div>"#,
        );
        let sel = Selector::parse("div").unwrap();
        let div = html.select(&sel).next().unwrap();
        let c = Container::from_element(div, Side::Prior);

        assert_eq!(
            c.segments(),
            &[
                Segment::unchanged("Hij is een "),
                Segment::changed("beroemde"),
                Segment::unchanged(" schrijver."),
            ]
        );
        assert_eq!(c.inline_changes(), &["beroemde".to_string()]);
        assert_eq!(c.text(), "Hij is een beroemde schrijver.");
    }

    #[test]
    fn other_side_markup_is_plain_text() {
        let html = first_div(
            r#"<div>a <ins class="diffchange diffchange-inline">b</ins> c</div>"#,
        );
        let sel = Selector::parse("div").unwrap();
        let div = html.select(&sel).next().unwrap();
        let c = Container::from_element(div, Side::Prior);

        assert!(!c.has_inline_change());
        assert_eq!(c.segments(), &[Segment::unchanged("a b c")]);
    }

    #[test]
    fn nested_markup_and_entities() {
        let html = first_div(
            r#"<div><span>x &amp; y</span> <ins class="diffchange diffchange-inline">new
            words</ins></div>"#,
        );
        let sel = Selector::parse("div").unwrap();
        let div = html.select(&sel).next().unwrap();
        let c = Container::from_element(div, Side::Post);

        assert_eq!(c.segments()[0], Segment::unchanged("x & y "));
        assert!(c.segments()[1].is_changed());
        assert_eq!(c.inline_changes(), &["new words".to_string()]);
    }

    #[test]
    fn merge_adjacent() {
        let c = Container::new(
            Side::Prior,
            vec![
                Segment::unchanged("a "),
                Segment::unchanged("b "),
                Segment::changed(""),
                Segment::changed("c"),
                Segment::changed("d"),
            ],
        );
        assert_eq!(
            c.segments(),
            &[Segment::unchanged("a b "), Segment::changed("cd")]
        );
    }
}
