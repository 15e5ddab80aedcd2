//! Filtering traits.

/// Immutable, pure filter: equal inputs give equal outputs.
///
/// `detect` returns `true` for items that should be kept.
pub trait Filter<T>: Default {
    fn detect(&self, item: T) -> bool;
}

/// Filter holding state, updated by each detection
/// (seen keys for deduplication, running statistics for outlier detection).
///
/// Some filters implement both traits: [FilterMut] is then used to learn from a collection,
/// and [Filter] to filter that same collection with what has been learnt.
pub trait FilterMut<T>: Default {
    fn detect_mut(&mut self, item: T) -> bool;
}
