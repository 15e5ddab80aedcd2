//! Example deduplication.
//!
//! Uses [runiq](https://github.com/whitfin/runiq) digests of a composite key,
//! so that memory usage does not depend on sentence lengths.
use itertools::Itertools;
use runiq::filters::{DigestFilter, Filter as RuniqFilter};

use super::FilterMut;
use crate::classification::Example;
use crate::config::{DedupField, PostFilterConfig};

/// Keeps the first example seen for each key.
pub struct Dedup {
    fields: Vec<DedupField>,
    separator: String,
    seen: DigestFilter,
}

impl Dedup {
    pub fn new(fields: Vec<DedupField>, separator: String) -> Self {
        Self {
            fields,
            separator,
            seen: DigestFilter::new(),
        }
    }

    pub fn from_config(config: &PostFilterConfig) -> Self {
        Self::new(config.dedup_fields.clone(), config.separator.clone())
    }

    /// Configured fields of `example`, joined by the separator.
    pub fn key(&self, example: &Example) -> String {
        self.fields
            .iter()
            .map(|field| field_value(example, *field))
            .join(&self.separator)
    }
}

impl Default for Dedup {
    fn default() -> Self {
        Self::from_config(&PostFilterConfig::default())
    }
}

impl FilterMut<&Example> for Dedup {
    fn detect_mut(&mut self, example: &Example) -> bool {
        let key = self.key(example);
        self.seen.detect(key.as_bytes())
    }
}

fn field_value(example: &Example, field: DedupField) -> &str {
    match field {
        DedupField::RevisionId => &example.revision_id,
        DedupField::PriorSentenceRaw => &example.prior_sentence_raw,
        DedupField::PriorSentenceTokens => &example.prior_sentence_tokens,
        DedupField::PostSentenceRaw => &example.post_sentence_raw,
        DedupField::PostSentenceTokens => &example.post_sentence_tokens,
    }
}
