//! Pipelines.
//!
//! Each pipeline reads revisions from JSON lines files and writes its records to a JSON lines file.
//! The module provides a light [pipeline::Pipeline] trait that every pipeline implements.
mod annotate;
mod diff;
#[allow(clippy::module_inception)]
mod pipeline;
mod prepare;
mod revisions;

pub use annotate::AnnotatePipeline;
pub use diff::DiffPipeline;
pub use pipeline::Pipeline;
pub use prepare::PreparePipeline;
pub use revisions::{process_revisions, write_records};
