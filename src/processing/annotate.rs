//! Revision diff page to annotated sentences.
use log::debug;

use crate::annotation::{AnnotatedSentence, Annotator};
use crate::config::Config;
use crate::error::Error;
use crate::extraction::{Chunk, Container, SpanExtractor};
use crate::revision::Revision;
use crate::text::TextTools;

/// Annotate every chunk of a revision.
///
/// Both sides of modified chunks are annotated, as well as purely deleted and added chunks.
/// Only containers that hold an inline change yield sentences.
pub fn annotate_revision(
    revision: &Revision,
    extractor: &SpanExtractor,
    tools: &TextTools,
    config: &Config,
) -> Result<Vec<AnnotatedSentence>, Error> {
    let revision_id = revision.revision_id();
    let revision_url = config.revision_url(revision_id);
    let annotator = Annotator::from_tools(tools);

    let mut records = Vec::new();
    for chunk in extractor.extract(revision.html_content()) {
        let containers: Vec<&Container> = match &chunk {
            Chunk::Modified { prior, post } => vec![prior, post],
            Chunk::Deleted(prior) => vec![prior],
            Chunk::Added(post) => vec![post],
        };

        for container in containers {
            for sentence in annotator.annotate(container, revision_id)? {
                records.push(sentence.to_record(revision_url.clone()));
            }
        }
    }

    debug!("[{}] {} annotated sentences", revision_id, records.len());
    Ok(records)
}
