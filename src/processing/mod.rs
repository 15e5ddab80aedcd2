/*! Revision processing

Single-revision entry points composing extraction, annotation, alignment and classification.

These functions hold no state and can be mapped over revisions concurrently.
!*/
mod annotate;
mod diff;
mod prepare;

pub use annotate::annotate_revision;
pub use diff::diff_revision;
pub use prepare::prepare_revision;
