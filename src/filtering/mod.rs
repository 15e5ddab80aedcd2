/*! Filtering utilities

Filters operate on the whole collection of examples, once every revision has been processed.

Filters implement [filter::Filter], [filter::FilterMut] or both:
- [filter::FilterMut] is implemented for filters that hold state (see [dedup::Dedup] for example),
- [filter::Filter] for filters that do not, or that have finished learning from a collection.

[post_filter] chains deduplication and length ratio outlier removal.
! */
mod dedup;
mod filter;
mod length_ratio;
mod post_filter;

pub use dedup::Dedup;
pub use filter::Filter;
pub use filter::FilterMut;
pub use length_ratio::LengthRatio;
pub use post_filter::{deduplicate, post_filter, remove_length_outliers};

#[cfg(test)]
pub(crate) mod tests {
    use crate::classification::{length_ratio, Example};

    pub fn example(revision_id: &str, prior: &str, post: &str) -> Example {
        Example {
            revision_id: revision_id.to_string(),
            bleu_score: 50.0,
            is_word_edit: Some(false),
            token_labels: Some(vec![0; prior.split_whitespace().count()]),
            length_ratio: length_ratio(prior, post),
            prior_sentence_raw: prior.to_string(),
            prior_sentence_tokens: prior.to_string(),
            post_sentence_raw: post.to_string(),
            post_sentence_tokens: post.to_string(),
        }
    }
}
