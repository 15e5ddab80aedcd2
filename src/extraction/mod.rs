/*! Span extraction

Turns the diff page of a revision into chunks of text, one per change node, keeping track of
inline-changed substrings.
!*/
mod chunks;
mod container;

pub use chunks::{Chunk, DiffChunks, SpanExtractor};
pub use container::{inline_changes, Container, Segment, Side, INLINE_CHANGE_CLASS};
