/*! Span annotation

Turns a diff container into labeled sentences:
sentences are split into spans at inline change boundaries,
and each span gets a label (`1` if it was removed by the edit, `0` otherwise).
!*/
mod annotator;
mod sentence;
mod span;

pub use annotator::{contains_image_reference, Annotator};
pub use sentence::{AnnotatedSentence, LabelRange, Sentence, SUBJECTIVE_LABEL};
pub use span::{Span, CHANGED, UNCHANGED};
