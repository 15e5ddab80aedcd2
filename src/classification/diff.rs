//! Token-level diffs.
//!
//! A diff is a list of [DiffChunk]s, each one being a run of tokens that is either
//! common to both sides, only in the prior side or only in the post side.
//! Adjacent chunks always have different tags, and a replacement is
//! a deleted chunk immediately followed by an inserted one.
use std::fmt;

use similar::{capture_diff_slices, Algorithm, DiffTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkTag {
    Equal,
    Delete,
    Insert,
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ChunkTag::Equal => "=",
            ChunkTag::Delete => "-",
            ChunkTag::Insert => "+",
        };
        write!(f, "{}", tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffChunk<T> {
    pub tag: ChunkTag,
    pub tokens: Vec<T>,
}

impl<T> DiffChunk<T> {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_equal(&self) -> bool {
        self.tag == ChunkTag::Equal
    }
}

/// Longest-common-subsequence diff of two token sequences.
pub fn diff<T: AsRef<str>>(prior: &[T], post: &[T]) -> Vec<DiffChunk<String>> {
    let old: Vec<&str> = prior.iter().map(AsRef::as_ref).collect();
    let new: Vec<&str> = post.iter().map(AsRef::as_ref).collect();

    let mut chunks: Vec<DiffChunk<String>> = Vec::new();
    for op in capture_diff_slices(Algorithm::Lcs, &old, &new) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => push(&mut chunks, ChunkTag::Equal, &old[old_range]),
            DiffTag::Delete => push(&mut chunks, ChunkTag::Delete, &old[old_range]),
            DiffTag::Insert => push(&mut chunks, ChunkTag::Insert, &new[new_range]),
            DiffTag::Replace => {
                push(&mut chunks, ChunkTag::Delete, &old[old_range]);
                push(&mut chunks, ChunkTag::Insert, &new[new_range]);
            }
        }
    }

    chunks
}

/// Append tokens, extending the last chunk if it has the same tag.
fn push(chunks: &mut Vec<DiffChunk<String>>, tag: ChunkTag, tokens: &[&str]) {
    if tokens.is_empty() {
        return;
    }

    let tokens = tokens.iter().map(|t| t.to_string());
    match chunks.last_mut() {
        Some(last) if last.tag == tag => last.tokens.extend(tokens),
        _ => chunks.push(DiffChunk {
            tag,
            tokens: tokens.collect(),
        }),
    }
}

/// Binary mask over the prior tokens: 1 for deleted tokens, 0 for common ones.
///
/// Inserted tokens do not show up in the mask.
pub fn token_labels<T>(chunks: &[DiffChunk<T>]) -> Vec<u8> {
    let mut labels = Vec::new();
    for chunk in chunks {
        match chunk.tag {
            ChunkTag::Equal => labels.extend(std::iter::repeat(0).take(chunk.len())),
            ChunkTag::Delete => labels.extend(std::iter::repeat(1).take(chunk.len())),
            ChunkTag::Insert => (),
        }
    }
    labels
}

/// Concatenation of every token of non-equal chunks.
pub fn changed_text<T: AsRef<str>>(chunks: &[DiffChunk<T>]) -> String {
    chunks
        .iter()
        .filter(|c| !c.is_equal())
        .flat_map(|c| c.tokens.iter().map(AsRef::as_ref))
        .collect()
}

/// A single word was removed, and replaced by at most one contiguous chunk.
pub fn is_single_word_edit<T>(chunks: &[DiffChunk<T>]) -> bool {
    let deleted: usize = chunks
        .iter()
        .filter(|c| c.tag == ChunkTag::Delete)
        .map(DiffChunk::len)
        .sum();
    if deleted != 1 {
        return false;
    }

    let inserted = chunks.iter().filter(|c| c.tag == ChunkTag::Insert).count();
    match inserted {
        0 => true,
        1 => chunks
            .iter()
            .position(|c| c.tag == ChunkTag::Delete)
            .and_then(|idx| chunks.get(idx + 1))
            .map(|next| next.tag == ChunkTag::Insert)
            .unwrap_or(false),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    fn tags(chunks: &[DiffChunk<String>]) -> String {
        chunks.iter().map(|c| c.tag.to_string()).collect()
    }

    #[test]
    fn deletion() {
        let d = diff(
            &toks("hij is een beroemde schrijver"),
            &toks("hij is een schrijver"),
        );
        assert_eq!(tags(&d), "=-=");
        assert_eq!(d[1].tokens, vec!["beroemde"]);
        assert_eq!(token_labels(&d), vec![0, 0, 0, 1, 0]);
        assert!(is_single_word_edit(&d));
    }

    #[test]
    fn replacement() {
        let d = diff(&toks("de kat is erg zwart"), &toks("de kat is zwart en wit"));
        assert_eq!(tags(&d), "=-=+");
        assert_eq!(token_labels(&d), vec![0, 0, 0, 1, 0]);
        // the insertion does not follow the deletion
        assert!(!is_single_word_edit(&d));

        let d = diff(&toks("een geweldige film"), &toks("een goede film"));
        assert_eq!(tags(&d), "=-+=");
        assert!(is_single_word_edit(&d));
    }

    #[test]
    fn not_single_word() {
        let d = diff(&toks("een zeer goede film"), &toks("een film"));
        assert!(!is_single_word_edit(&d));

        // two separate insertions
        let d = diff(&toks("a b c d"), &toks("x b c y d"));
        assert!(!is_single_word_edit(&d));

        // insertion not right after the deletion
        let chunks = vec![
            DiffChunk {
                tag: ChunkTag::Delete,
                tokens: vec!["a"],
            },
            DiffChunk {
                tag: ChunkTag::Equal,
                tokens: vec!["b"],
            },
            DiffChunk {
                tag: ChunkTag::Insert,
                tokens: vec!["c"],
            },
        ];
        assert!(!is_single_word_edit(&chunks));
    }

    #[test]
    fn identical() {
        let d = diff(&toks("de kat"), &toks("de kat"));
        assert_eq!(tags(&d), "=");
        assert_eq!(changed_text(&d), "");
        assert!(!is_single_word_edit(&d));
    }

    #[test]
    fn changed() {
        let d = diff(&toks("de kat is zwart ."), &toks("de kat is zwart ,"));
        assert_eq!(changed_text(&d), ".,");
    }
}
