//! Revision records.
//!
//! A [Revision] is what the fetcher hands us: an id and the rendered diff page.
//! A [RevisionDiff] is the flattened text view of its change nodes.
use serde::{Deserialize, Serialize};

/// Placeholder used when a revision has no purely deleted chunk.
pub const NO_DELETED_CHUNKS: &str = "no_deleted_chunks";
/// Placeholder used when a revision has no purely added chunk.
pub const NO_ADDED_CHUNKS: &str = "no_added_chunks";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    #[serde(deserialize_with = "string_or_number")]
    revision_id: String,
    html_content: String,
}

impl Revision {
    pub fn new(revision_id: String, html_content: String) -> Self {
        Self {
            revision_id,
            html_content,
        }
    }

    pub fn revision_id(&self) -> &str {
        &self.revision_id
    }

    pub fn html_content(&self) -> &str {
        &self.html_content
    }
}

/// Text of the change nodes of a revision.
///
/// `prior` and `post` are index-aligned (one entry per modified chunk).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionDiff {
    pub revision_id: String,
    pub prior: Vec<String>,
    pub post: Vec<String>,
    pub prior_deleted: Vec<String>,
    pub post_added: Vec<String>,
}

impl RevisionDiff {
    /// `true` if the revision has purely deleted or purely added chunks.
    pub fn has_non_edit_chunks(&self) -> bool {
        self.prior_deleted != [NO_DELETED_CHUNKS] || self.post_added != [NO_ADDED_CHUNKS]
    }
}

/// Revision ids are numeric on Wikipedia and are sometimes stored as numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}
