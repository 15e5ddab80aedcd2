//! Readers.
mod jsonl;
mod sources;

pub use jsonl::JsonlReader;
pub(crate) use jsonl::is_gzip;
pub use sources::source_files;
