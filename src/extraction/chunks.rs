//! Change node pairing.
//!
//! A rendered diff table lists, row after row, a prior cell and a post cell.
//! Prior cells carry the `diff-deletedline` class, post cells the `diff-addedline` one,
//! and missing sides are rendered as `diff-empty` cells that hold no `<div>`.
//!
//! Marker nodes are taken in document order and consumed two by two.
//! Each pair is then classified:
//!
//! | prior   | post    | chunk      |
//! |---------|---------|------------|
//! | empty   | empty   | (dropped)  |
//! | empty   | present | `Added`    |
//! | present | empty   | `Deleted`  |
//! | present | present | `Modified` |
use log::debug;
use scraper::{ElementRef, Html, Selector};

use super::container::{Container, Side};
use crate::error::Error;

/// One classified change node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    Modified { prior: Container, post: Container },
    Deleted(Container),
    Added(Container),
}

/// Chunks of a revision, grouped by kind while keeping their order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffChunks {
    pub prior_changed: Vec<Container>,
    pub post_changed: Vec<Container>,
    pub prior_deleted: Vec<Container>,
    pub post_added: Vec<Container>,
}

impl DiffChunks {
    pub fn is_empty(&self) -> bool {
        self.prior_changed.is_empty()
            && self.post_changed.is_empty()
            && self.prior_deleted.is_empty()
            && self.post_added.is_empty()
    }

    /// Modified chunks as (prior, post) pairs.
    pub fn modified(&self) -> impl Iterator<Item = (&Container, &Container)> {
        self.prior_changed.iter().zip(self.post_changed.iter())
    }
}

impl From<Vec<Chunk>> for DiffChunks {
    fn from(chunks: Vec<Chunk>) -> Self {
        let mut ret = DiffChunks::default();
        for chunk in chunks {
            match chunk {
                Chunk::Modified { prior, post } => {
                    ret.prior_changed.push(prior);
                    ret.post_changed.push(post);
                }
                Chunk::Deleted(c) => ret.prior_deleted.push(c),
                Chunk::Added(c) => ret.post_added.push(c),
            }
        }
        ret
    }
}

/// Extracts chunks from diff-table markup.
pub struct SpanExtractor {
    nodes: Selector,
    container: Selector,
}

impl SpanExtractor {
    /// Use custom marker classes (the defaults are `diff-deletedline`, `diff-addedline` and `diff-empty`).
    pub fn with_classes(deleted: &str, added: &str, empty: &str) -> Result<Self, Error> {
        let nodes = format!(".{}, .{}, .{}", deleted, added, empty);
        let nodes = Selector::parse(&nodes).map_err(|e| Error::Selector(format!("{:?}", e)))?;
        let container = Selector::parse("div").map_err(|e| Error::Selector(format!("{:?}", e)))?;

        Ok(Self { nodes, container })
    }

    pub fn new() -> Result<Self, Error> {
        Self::with_classes("diff-deletedline", "diff-addedline", "diff-empty")
    }

    /// Classify every change node pair of the provided markup.
    ///
    /// Markup without any marker node yields no chunk.
    pub fn extract(&self, html_content: &str) -> Vec<Chunk> {
        let document = Html::parse_document(html_content);
        let nodes: Vec<ElementRef> = document.select(&self.nodes).collect();

        if nodes.len() % 2 != 0 {
            debug!("dropping unpaired trailing node ({} nodes)", nodes.len());
        }

        nodes
            .chunks_exact(2)
            .filter_map(|pair| {
                let prior = self.container_of(pair[0], Side::Prior);
                let post = self.container_of(pair[1], Side::Post);

                match (prior, post) {
                    (None, None) => None,
                    (None, Some(post)) => Some(Chunk::Added(post)),
                    (Some(prior), None) => Some(Chunk::Deleted(prior)),
                    (Some(prior), Some(post)) => Some(Chunk::Modified { prior, post }),
                }
            })
            .collect()
    }

    /// Group the chunks of the provided markup by kind.
    pub fn extract_grouped(&self, html_content: &str) -> DiffChunks {
        DiffChunks::from(self.extract(html_content))
    }

    /// Get the inner container of a node, if it has one that holds some text.
    fn container_of(&self, node: ElementRef, side: Side) -> Option<Container> {
        node.select(&self.container)
            .next()
            .map(|div| Container::from_element(div, side))
            .filter(|container| !container.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(prior: Option<&str>, post: Option<&str>) -> String {
        let cell = |class: &str, content: Option<&str>| match content {
            Some(c) => format!(r#"<td class="{}"><div>{}</div></td>"#, class, c),
            None => r#"<td colspan="2" class="diff-empty">&#160;</td>"#.to_string(),
        };
        format!(
            "<tr>{}{}</tr>",
            cell("diff-deletedline", prior),
            cell("diff-addedline", post)
        )
    }

    fn table(rows: &[String]) -> String {
        format!(
            r#"<html><body><table class="diff">{}</table></body></html>"#,
            rows.join("")
        )
    }

    #[test]
    fn no_nodes() {
        let se = SpanExtractor::new().unwrap();
        let chunks = se.extract_grouped("<html><body><p>nothing to see</p></body></html>");
        assert!(chunks.is_empty());

        let chunks = se.extract_grouped("");
        assert!(chunks.is_empty());
    }

    #[test]
    fn four_way_classification() {
        let html = table(&[
            row(None, None),
            row(None, Some("nieuw")),
            row(Some("oud"), None),
            row(
                Some(r#"de <del class="diffchange diffchange-inline">grote</del> kat"#),
                Some(r#"de <ins class="diffchange diffchange-inline">kleine</ins> kat"#),
            ),
        ]);

        let se = SpanExtractor::new().unwrap();
        let chunks = se.extract(&html);
        assert_eq!(chunks.len(), 3);

        let grouped = DiffChunks::from(chunks);
        assert_eq!(grouped.post_added[0].text(), "nieuw");
        assert_eq!(grouped.prior_deleted[0].text(), "oud");
        assert_eq!(grouped.prior_changed[0].text(), "de grote kat");
        assert_eq!(grouped.post_changed[0].text(), "de kleine kat");
        assert_eq!(grouped.prior_changed[0].inline_changes(), &["grote".to_string()]);
        assert_eq!(grouped.post_changed[0].inline_changes(), &["kleine".to_string()]);
        assert_eq!(grouped.modified().count(), 1);
    }

    #[test]
    fn odd_trailing_node() {
        let html = format!(
            r#"<table>{}<tr><td class="diff-deletedline"><div>alleen</div></td></tr></table>"#,
            row(Some("a"), Some("b"))
        );
        let se = SpanExtractor::new().unwrap();
        let chunks = se.extract_grouped(&html);
        assert_eq!(chunks.prior_changed.len(), 1);
        assert!(chunks.prior_deleted.is_empty());
    }

    #[test]
    fn node_without_container() {
        let html = r#"<table><tr><td class="diff-deletedline"></td><td class="diff-addedline"><div>b</div></td></tr></table>"#;
        let se = SpanExtractor::new().unwrap();
        let chunks = se.extract(html);
        assert_eq!(chunks, vec![Chunk::Added(Container::new(
            Side::Post,
            vec![super::super::Segment::unchanged("b")]
        ))]);
    }

    #[test]
    fn custom_classes() {
        let html = r#"<table><tr><td class="diff-side-deleted"><div>a</div></td><td class="diff-side-added"><div>b</div></td></tr></table>"#;
        let se = SpanExtractor::with_classes("diff-side-deleted", "diff-side-added", "diff-empty")
            .unwrap();
        assert_eq!(se.extract_grouped(html).prior_changed.len(), 1);
    }

    #[test]
    fn invalid_classes() {
        assert!(SpanExtractor::with_classes("[", "b", "c").is_err());
    }
}
