//! Revision diff page to text chunks.
use log::{debug, info};

use crate::extraction::{Container, SpanExtractor};
use crate::revision::{Revision, RevisionDiff, NO_ADDED_CHUNKS, NO_DELETED_CHUNKS};
use crate::text::clean_wiki_text;

/// Extract the cleaned chunk texts of a revision.
///
/// Revisions without purely deleted (resp. added) chunks get a [NO_DELETED_CHUNKS]
/// (resp. [NO_ADDED_CHUNKS]) placeholder.
pub fn diff_revision(revision: &Revision, extractor: &SpanExtractor) -> RevisionDiff {
    let revision_id = revision.revision_id();
    info!("[{}] extracting chunks", revision_id);

    let chunks = extractor.extract_grouped(revision.html_content());
    debug!(
        "[{}] {} modified, {} deleted, {} added chunks",
        revision_id,
        chunks.prior_changed.len(),
        chunks.prior_deleted.len(),
        chunks.post_added.len()
    );

    let (prior, post) = chunks
        .modified()
        .map(|(prior, post)| (clean(prior), clean(post)))
        .unzip();

    RevisionDiff {
        revision_id: revision_id.to_string(),
        prior,
        post,
        prior_deleted: or_placeholder(&chunks.prior_deleted, NO_DELETED_CHUNKS),
        post_added: or_placeholder(&chunks.post_added, NO_ADDED_CHUNKS),
    }
}

fn clean(container: &Container) -> String {
    clean_wiki_text(&container.text())
}

fn or_placeholder(containers: &[Container], placeholder: &str) -> Vec<String> {
    if containers.is_empty() {
        vec![placeholder.to_string()]
    } else {
        containers.iter().map(clean).collect()
    }
}
