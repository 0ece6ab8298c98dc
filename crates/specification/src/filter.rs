//! Selecting the items of a collection that satisfy a specification.
//!
//! `Filter` is polymorphic over both the element type and the
//! specification, so adding a criterion never touches this module.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use tracing::debug;

use crate::traits::Specification;

/// Selects items from a slice according to a specification.
pub trait Filter<T> {
    /// Lazily yield the items of `items` satisfying `spec`, in their
    /// original relative order. `items` is only borrowed.
    fn filter<'a, 's, S>(&self, items: &'a [T], spec: &'s S) -> Filtered<'a, 's, T, S>
    where
        S: Specification<T> + ?Sized;
}

/// Lazy sequence of matching items, produced by [`Filter::filter`].
///
/// Cloning yields an independent pass starting from the *current*
/// position. [`Filtered::restart`] always yields a pass over the whole
/// source, even after this one has been partly consumed. The sequence is
/// finite and fused.
pub struct Filtered<'a, 's, T, S: ?Sized> {
    source: &'a [T],
    items: slice::Iter<'a, T>,
    spec: &'s S,
}

impl<'a, 's, T, S: ?Sized> Filtered<'a, 's, T, S> {
    pub fn new(items: &'a [T], spec: &'s S) -> Self {
        Self {
            source: items,
            items: items.iter(),
            spec,
        }
    }

    /// Number of items not yet examined
    pub fn remaining(&self) -> usize {
        self.items.len()
    }

    /// A fresh pass over the whole source with the same specification
    pub fn restart(&self) -> Self {
        Self::new(self.source, self.spec)
    }
}

impl<'a, 's, T, S> Filtered<'a, 's, T, S>
where
    S: Specification<T> + ?Sized,
{
    /// Count the matches left in this pass without consuming it.
    pub fn count_matches(&self) -> usize {
        self.clone().count()
    }
}

impl<'a, 's, T, S: ?Sized> Clone for Filtered<'a, 's, T, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            items: self.items.clone(),
            spec: self.spec,
        }
    }
}

impl<'a, 's, T, S> Iterator for Filtered<'a, 's, T, S>
where
    S: Specification<T> + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let spec = self.spec;
        self.items.find(|item| spec.is_satisfied(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.items.len()))
    }
}

impl<'a, 's, T, S> DoubleEndedIterator for Filtered<'a, 's, T, S>
where
    S: Specification<T> + ?Sized,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let spec = self.spec;
        self.items.rfind(|item| spec.is_satisfied(item))
    }
}

impl<'a, 's, T, S> FusedIterator for Filtered<'a, 's, T, S> where S: Specification<T> + ?Sized {}

impl<'a, 's, T, S> fmt::Debug for Filtered<'a, 's, T, S>
where
    S: Specification<T> + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filtered")
            .field("spec", &self.spec.name())
            .field("remaining", &self.items.len())
            .finish()
    }
}

/// The stateless, re-entrant filter.
///
/// ## Usage
/// ```ignore
/// let green = ColorSpecification::new(Color::Green);
/// for product in SpecFilter.filter(catalog.products(), &green) {
///     println!(" - {} is green", product.name);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecFilter;

impl SpecFilter {
    /// Filter an owned `Vec`, keeping only the satisfying items.
    ///
    /// Order is preserved; no item is cloned.
    pub fn filter_owned<T, S>(&self, items: Vec<T>, spec: &S) -> Vec<T>
    where
        S: Specification<T> + ?Sized,
    {
        debug!(
            "Applying specification: {} (input count: {})",
            spec.name(),
            items.len()
        );
        let filtered: Vec<T> = items
            .into_iter()
            .filter(|item| spec.is_satisfied(item))
            .collect();
        debug!(
            "Specification applied: {} (output count: {})",
            spec.name(),
            filtered.len()
        );
        filtered
    }
}

impl<T> Filter<T> for SpecFilter {
    fn filter<'a, 's, S>(&self, items: &'a [T], spec: &'s S) -> Filtered<'a, 's, T, S>
    where
        S: Specification<T> + ?Sized,
    {
        debug!(
            "Filtering with specification: {} (input count: {})",
            spec.name(),
            items.len()
        );
        Filtered::new(items, spec)
    }
}

/// Shorthand for `SpecFilter.filter(items, spec)`.
pub fn filter<'a, 's, T, S>(items: &'a [T], spec: &'s S) -> Filtered<'a, 's, T, S>
where
    S: Specification<T> + ?Sized,
{
    SpecFilter.filter(items, spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{FnSpecification, SpecificationExt};

    fn even() -> FnSpecification<impl Fn(&i32) -> bool + Send + Sync> {
        FnSpecification::new("even", |n: &i32| n % 2 == 0)
    }

    #[test]
    fn test_filter_keeps_order() {
        let items = vec![5, 2, 8, 3, 4, 7, 6];
        let spec = even();
        let filtered: Vec<i32> = filter(&items, &spec).copied().collect();
        assert_eq!(filtered, vec![2, 8, 4, 6]);
    }

    #[test]
    fn test_filter_empty_input() {
        let items: Vec<i32> = Vec::new();
        let spec = even();
        assert_eq!(filter(&items, &spec).count(), 0);
    }

    #[test]
    fn test_filter_no_match() {
        let items = vec![1, 3, 5];
        let spec = even();
        let mut filtered = filter(&items, &spec);
        assert_eq!(filtered.next(), None);
        assert_eq!(filtered.next(), None);
    }

    #[test]
    fn test_filter_is_lazy() {
        let items = vec![2, 1, 4, 6];
        let spec = even();
        let mut filtered = filter(&items, &spec);

        assert_eq!(filtered.remaining(), 4);
        assert_eq!(filtered.next(), Some(&2));
        assert_eq!(filtered.remaining(), 3);
        assert_eq!(filtered.next(), Some(&4));
        assert_eq!(filtered.remaining(), 1);
    }

    #[test]
    fn test_filter_is_restartable() {
        let items = vec![1, 2, 3, 4];
        let spec = even();
        let pass = filter(&items, &spec);

        let first: Vec<&i32> = pass.clone().collect();
        let second: Vec<&i32> = pass.collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![&2, &4]);
    }

    #[test]
    fn test_restart_after_partial_consumption() {
        let items = vec![2, 1, 4, 6];
        let spec = even();
        let mut pass = filter(&items, &spec);

        assert_eq!(pass.next(), Some(&2));
        assert_eq!(pass.clone().collect::<Vec<_>>(), vec![&4, &6]);

        let again: Vec<&i32> = pass.restart().collect();
        assert_eq!(again, vec![&2, &4, &6]);
        assert_eq!(pass.next(), Some(&4));
    }

    #[test]
    fn test_count_matches_does_not_consume() {
        let items = vec![1, 2, 3, 4, 6];
        let spec = even();
        let mut pass = filter(&items, &spec);

        assert_eq!(pass.count_matches(), 3);
        assert_eq!(pass.next(), Some(&2));
        assert_eq!(pass.count_matches(), 2);
        assert_eq!(pass.restart().count_matches(), 3);
    }

    #[test]
    fn test_filter_from_the_back() {
        let items = vec![2, 3, 4, 5, 6];
        let spec = even();
        let reversed: Vec<i32> = filter(&items, &spec).rev().copied().collect();
        assert_eq!(reversed, vec![6, 4, 2]);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let items = vec![4, 3, 2, 1];
        let spec = even().not();
        let _ = filter(&items, &spec).count();
        assert_eq!(items, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_filter_with_trait_object() {
        let items = vec![1, 2, 3, 4];
        let spec: Box<dyn Specification<i32>> = even().boxed();
        let filtered: Vec<&i32> = SpecFilter.filter(&items, spec.as_ref()).collect();
        assert_eq!(filtered, vec![&2, &4]);
    }

    #[test]
    fn test_filter_owned() {
        let items = vec![
            "apple".to_string(),
            "tree".to_string(),
            "avocado".to_string(),
        ];
        let spec = FnSpecification::new("starts with a", |s: &String| s.starts_with('a'));
        let filtered = SpecFilter.filter_owned(items, &spec);
        assert_eq!(filtered, vec!["apple".to_string(), "avocado".to_string()]);
    }

    #[test]
    fn test_filtered_debug() {
        let items = vec![1, 2];
        let spec = even();
        let rendered = format!("{:?}", filter(&items, &spec));
        assert!(rendered.contains("even"));
        assert!(rendered.contains("remaining: 2"));
    }
}
