/*! Edit classification

Decides whether an aligned sentence pair makes a usable example
and labels the prior tokens that were changed.
!*/
mod classifier;
mod diff;
mod example;
mod levenshtein;

pub use classifier::{Criteria, Decision, EditClassifier, Rejection, SentencePair};
pub use diff::{changed_text, diff, is_single_word_edit, token_labels, ChunkTag, DiffChunk};
pub use example::{length_ratio, Example};
pub use levenshtein::levenshtein;
