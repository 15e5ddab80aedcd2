//! Revisions to revision diffs.
use std::path::PathBuf;

use log::info;

use super::pipeline::Pipeline;
use super::revisions::{process_revisions, write_records};
use crate::error::Error;
use crate::extraction::SpanExtractor;
use crate::processing::diff_revision;

pub struct DiffPipeline {
    src: PathBuf,
    dst: PathBuf,
    extractor: SpanExtractor,
}

impl DiffPipeline {
    pub fn new(src: PathBuf, dst: PathBuf, extractor: SpanExtractor) -> Self {
        Self {
            src,
            dst,
            extractor,
        }
    }
}

impl Pipeline<usize> for DiffPipeline {
    fn version() -> &'static str {
        "1.0.0"
    }

    /// Returns the number of written diffs.
    fn run(&self) -> Result<usize, Error> {
        info!("diff pipeline v{}: {:?} -> {:?}", Self::version(), self.src, self.dst);
        let diffs = process_revisions(&self.src, |revision| {
            Ok(vec![diff_revision(revision, &self.extractor)])
        })?;
        write_records(&self.dst, &diffs)
    }
}
