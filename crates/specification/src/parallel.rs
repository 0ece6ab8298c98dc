//! Order-preserving parallel filtering with Rayon.
//!
//! The slice is split into partitions that are filtered independently on
//! the Rayon pool; the partial results are concatenated in partition
//! order, so the output is identical to the sequential filter.

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::traits::Specification;

/// Default minimum partition length. Below this, splitting costs more
/// than evaluating cheap predicates.
pub const DEFAULT_MIN_LEN: usize = 1024;

/// Filter `items` in parallel, returning matches in original order.
pub fn par_filter<'a, T, S>(items: &'a [T], spec: &S) -> Vec<&'a T>
where
    T: Sync,
    S: Specification<T> + ?Sized,
{
    items
        .par_iter()
        .filter(|item| spec.is_satisfied(item))
        .collect()
}

/// Parallel filter with a configurable partition size.
///
/// Inputs shorter than `min_len` are filtered on the calling thread.
#[derive(Debug, Clone, Copy)]
pub struct ParallelFilter {
    min_len: usize,
}

impl ParallelFilter {
    pub fn new() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
        }
    }

    /// Set the minimum number of items per partition (at least 1).
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len.max(1);
        self
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    #[instrument(skip_all, fields(input_count = items.len(), spec = %spec.name()))]
    pub fn filter<'a, T, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        T: Sync,
        S: Specification<T> + ?Sized,
    {
        if items.len() < self.min_len {
            debug!("Input below partition threshold, filtering sequentially");
            return items
                .iter()
                .filter(|item| spec.is_satisfied(item))
                .collect();
        }

        let filtered: Vec<&'a T> = items
            .par_iter()
            .with_min_len(self.min_len)
            .filter(|item| spec.is_satisfied(item))
            .collect();
        debug!("Parallel filter output count: {}", filtered.len());
        filtered
    }
}

impl Default for ParallelFilter {
    fn default() -> Self {
        Self::new()
    }
}
