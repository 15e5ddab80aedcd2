//! Revisions to annotated sentences.
use std::path::PathBuf;

use log::info;

use super::pipeline::Pipeline;
use super::revisions::{process_revisions, write_records};
use crate::config::Config;
use crate::error::Error;
use crate::extraction::SpanExtractor;
use crate::processing::annotate_revision;
use crate::text::TextTools;

pub struct AnnotatePipeline {
    src: PathBuf,
    dst: PathBuf,
    config: Config,
    extractor: SpanExtractor,
    tools: TextTools,
}

impl AnnotatePipeline {
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        config: Config,
        extractor: SpanExtractor,
        tools: TextTools,
    ) -> Self {
        Self {
            src,
            dst,
            config,
            extractor,
            tools,
        }
    }
}

impl Pipeline<usize> for AnnotatePipeline {
    fn version() -> &'static str {
        "1.0.0"
    }

    /// Returns the number of written sentences.
    fn run(&self) -> Result<usize, Error> {
        info!("annotate pipeline v{}: {:?} -> {:?}", Self::version(), self.src, self.dst);
        let sentences = process_revisions(&self.src, |revision| {
            annotate_revision(revision, &self.extractor, &self.tools, &self.config)
        })?;
        write_records(&self.dst, &sentences)
    }
}
