//! # neutrality-corpus
//!
//! Builds a corpus of subjective-bias edits out of Wikipedia revision diffs.
//!
//! A revision diff page is parsed into changed chunks ([extraction]),
//! sentences of both sides are paired by windowed BLEU ([alignment]),
//! pairs are kept or discarded and labelled at token level ([classification]),
//! and the resulting corpus is deduplicated and cleaned of length outliers ([filtering]).
//! Independently, changed spans can be annotated at sentence level ([annotation]).
//!
//! [pipelines] chain these steps over JSON lines files of revisions.
pub mod alignment;
pub mod annotation;
pub mod classification;
pub mod config;
pub mod error;
pub mod extraction;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod revision;
pub mod text;
