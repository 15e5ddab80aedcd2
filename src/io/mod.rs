/*!
# IO utilities

Revisions are read from JSON lines files (optionally gzipped),
and every pipeline output is written back as JSON lines.
!*/
pub mod reader;
pub mod writer;

pub use reader::{source_files, JsonlReader};
pub use writer::JsonlWriter;
