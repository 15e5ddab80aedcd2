//! Revisions to a filtered corpus of examples.
//!
//! # Processing
//! 1. Each revision is diffed, then prepared into zero or more examples, concurrently.
//! 1. Once every revision is processed, the whole collection is deduplicated
//!    and length ratio outliers are removed.
//! 1. Remaining examples are written in input order.
use std::path::PathBuf;

use log::info;

use super::pipeline::Pipeline;
use super::revisions::{process_revisions, write_records};
use crate::config::Config;
use crate::error::Error;
use crate::extraction::SpanExtractor;
use crate::filtering::post_filter;
use crate::processing::{diff_revision, prepare_revision};
use crate::text::TextTools;

pub struct PreparePipeline {
    src: PathBuf,
    dst: PathBuf,
    config: Config,
    extractor: SpanExtractor,
    tools: TextTools,
}

impl PreparePipeline {
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

impl Pipeline<usize> for PreparePipeline {
    fn version() -> &'static str {
        "1.0.0"
    }

    /// Returns the number of written examples.
    fn run(&self) -> Result<usize, Error> {
        info!("prepare pipeline v{}: {:?} -> {:?}", Self::version(), self.src, self.dst);

        let examples = process_revisions(&self.src, |revision| {
            let diff = diff_revision(revision, &self.extractor);
            prepare_revision(&diff, &self.tools, &self.config)
        })?;

        // barrier: statistics need every example
        let examples = post_filter(examples, &self.config.post_filter);
        write_records(&self.dst, &examples)
    }
}
