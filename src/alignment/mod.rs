//! Sentence alignment between the prior and post versions of a text.
mod aligner;
mod bleu;

pub use aligner::{AlignedPair, Aligner};
pub use bleu::bleu;
