//! Collection-level filtering of examples.
use log::info;

use super::dedup::Dedup;
use super::length_ratio::LengthRatio;
use super::{Filter, FilterMut};
use crate::classification::Example;
use crate::config::PostFilterConfig;

/// Remove duplicate examples, keeping the first occurrence.
pub fn deduplicate(examples: Vec<Example>, config: &PostFilterConfig) -> Vec<Example> {
    let mut filter = Dedup::from_config(config);
    examples
        .into_iter()
        .filter(|e| filter.detect_mut(e))
        .collect()
}

/// Remove examples whose length ratio is an outlier.
///
/// Statistics are computed once over the whole collection before filtering.
pub fn remove_length_outliers(examples: Vec<Example>, config: &PostFilterConfig) -> Vec<Example> {
    let mut filter = LengthRatio::with_factor(config.std_factor);
    for example in &examples {
        filter.detect_mut(example.length_ratio);
    }

    let (lower, upper) = filter.bounds();
    info!(
        "length ratio: mean={:.3} std={:.3}, keeping [{:.3}, {:.3}]",
        filter.mean(),
        filter.std(),
        lower,
        upper
    );

    examples
        .into_iter()
        .filter(|e| filter.detect(e.length_ratio))
        .collect()
}

/// Deduplicate, then remove length ratio outliers.
///
/// Requires the whole collection, and preserves the order of kept examples.
pub fn post_filter(examples: Vec<Example>, config: &PostFilterConfig) -> Vec<Example> {
    let nb_examples = examples.len();
    let examples = deduplicate(examples, config);
    let nb_unique = examples.len();
    let examples = remove_length_outliers(examples, config);

    info!(
        "post filter: {} examples, {} after deduplication, {} after outlier removal",
        nb_examples,
        nb_unique,
        examples.len()
    );
    examples
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;
    use rand_distr::{Distribution, Normal};

    use super::*;
    use crate::filtering::tests::example;

    fn with_ratio(id: usize, ratio: f64) -> Example {
        let mut e = example(&id.to_string(), "prior", "post");
        e.length_ratio = ratio;
        e
    }

    #[test]
    fn dedup_idempotent() {
        let config = PostFilterConfig::default();
        let examples = vec![
            example("1", "a", "b"),
            example("1", "a", "b"),
            example("1", "a", "c"),
            example("2", "a", "b"),
        ];
        let once = deduplicate(examples, &config);
        assert_eq!(once.len(), 3);
        let twice = deduplicate(once.clone(), &config);
        assert_eq!(once, twice);
    }

    #[test]
    fn outlier_bound() {
        let config = PostFilterConfig::default();
        let mut rng = thread_rng();
        let normal = Normal::new(1.0, 0.2).unwrap();
        let mut examples: Vec<Example> = normal
            .sample_iter(&mut rng)
            .take(1_000)
            .enumerate()
            .map(|(id, ratio): (usize, f64)| with_ratio(id, ratio.abs()))
            .collect();
        examples.push(with_ratio(1_000, 10.0));

        // statistics over the collection passed in
        let mut stats = LengthRatio::with_factor(config.std_factor);
        for e in &examples {
            stats.detect_mut(e.length_ratio);
        }
        let (lower, upper) = stats.bounds();

        let kept = remove_length_outliers(examples, &config);
        assert!(!kept.is_empty());
        assert!(kept
            .iter()
            .all(|e| lower <= e.length_ratio && e.length_ratio <= upper));
        assert!(kept.iter().all(|e| e.revision_id != "1000"));
    }

    #[test]
    fn order_preserved() {
        let config = PostFilterConfig::default();
        let examples: Vec<Example> = (0..10).map(|id| with_ratio(id, 1.0)).collect();
        let kept = post_filter(examples.clone(), &config);
        assert_eq!(kept, examples);
    }

    #[test]
    fn empty() {
        assert!(post_filter(Vec::new(), &PostFilterConfig::default()).is_empty());
    }
}
