//! Writers.
mod jsonl;

pub use jsonl::JsonlWriter;
