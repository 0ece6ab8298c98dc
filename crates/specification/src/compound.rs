//! Compound specifications.
//!
//! Binary combinators (`AndSpecification`, `OrSpecification`) and negation
//! (`NotSpecification`) are generic over their children, so a tree built
//! from concrete leaves is monomorphised. `AllOf` and `AnyOf` hold any
//! number of boxed children and are assembled with a builder.
//!
//! Children are owned by the compound for its whole lifetime. Evaluation
//! order only matters for short-circuiting, never for the result.

use crate::error::{Result, SpecificationError};
use crate::traits::Specification;

/// True iff both children are satisfied.
///
/// The second child is not evaluated when the first returns false.
#[derive(Debug, Clone)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A, B> Specification<T> for AndSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }

    fn name(&self) -> String {
        format!("({} AND {})", self.first.name(), self.second.name())
    }
}

/// True iff at least one child is satisfied.
///
/// The second child is not evaluated when the first returns true.
#[derive(Debug, Clone)]
pub struct OrSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A, B> Specification<T> for OrSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) || self.second.is_satisfied(item)
    }

    fn name(&self) -> String {
        format!("({} OR {})", self.first.name(), self.second.name())
    }
}

/// True iff the inner specification is not satisfied.
#[derive(Debug, Clone)]
pub struct NotSpecification<S> {
    inner: S,
}

impl<S> NotSpecification<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized, S: Specification<T>> Specification<T> for NotSpecification<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }

    fn name(&self) -> String {
        format!("NOT {}", self.inner.name())
    }
}

/// Conjunction over any number of children.
///
/// ## Usage
/// ```ignore
/// let spec = AllOf::new()
///     .with(ColorSpecification::new(Color::Blue))
///     .with(SizeSpecification::new(Size::Large));
/// ```
///
/// An `AllOf` built from the builder with no children is vacuously
/// satisfied. Use [`AllOf::try_from_specs`] when the children come from
/// the outside and an empty list is a caller error.
pub struct AllOf<T: ?Sized> {
    specs: Vec<Box<dyn Specification<T>>>,
}

impl<T: ?Sized> AllOf<T> {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Add a child (builder pattern).
    pub fn with(mut self, spec: impl Specification<T> + 'static) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    /// Build from an existing list of children.
    ///
    /// # Errors
    /// `InvalidArgument` if `specs` is empty.
    pub fn try_from_specs(specs: Vec<Box<dyn Specification<T>>>) -> Result<Self> {
        if specs.is_empty() {
            return Err(SpecificationError::InvalidArgument(
                "AllOf requires at least one specification".to_string(),
            ));
        }
        Ok(Self { specs })
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T: ?Sized> Default for AllOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Specification<T> for AllOf<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(item))
    }

    fn name(&self) -> String {
        join_names(&self.specs, " AND ", "TRUE")
    }
}

/// Disjunction over any number of children.
///
/// An empty `AnyOf` is never satisfied.
pub struct AnyOf<T: ?Sized> {
    specs: Vec<Box<dyn Specification<T>>>,
}

impl<T: ?Sized> AnyOf<T> {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    pub fn with(mut self, spec: impl Specification<T> + 'static) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    /// # Errors
    /// `InvalidArgument` if `specs` is empty.
    pub fn try_from_specs(specs: Vec<Box<dyn Specification<T>>>) -> Result<Self> {
        if specs.is_empty() {
            return Err(SpecificationError::InvalidArgument(
                "AnyOf requires at least one specification".to_string(),
            ));
        }
        Ok(Self { specs })
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T: ?Sized> Default for AnyOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Specification<T> for AnyOf<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().any(|spec| spec.is_satisfied(item))
    }

    fn name(&self) -> String {
        join_names(&self.specs, " OR ", "FALSE")
    }
}

fn join_names<T: ?Sized>(
    specs: &[Box<dyn Specification<T>>],
    separator: &str,
    empty: &str,
) -> String {
    match specs {
        [] => empty.to_string(),
        [only] => only.name(),
        _ => {
            let names: Vec<String> = specs.iter().map(|spec| spec.name()).collect();
            format!("({})", names.join(separator))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{FnSpecification, SpecificationExt};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn greater_than(n: i32) -> FnSpecification<impl Fn(&i32) -> bool + Send + Sync + Clone> {
        FnSpecification::new(format!("> {}", n), move |x: &i32| *x > n)
    }

    fn less_than(n: i32) -> FnSpecification<impl Fn(&i32) -> bool + Send + Sync + Clone> {
        FnSpecification::new(format!("< {}", n), move |x: &i32| *x < n)
    }

    /// Counts how often it is evaluated, to observe short-circuiting.
    struct Counting {
        result: bool,
        calls: Arc<AtomicUsize>,
    }

    impl Specification<i32> for Counting {
        fn is_satisfied(&self, _item: &i32) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
        }

        fn name(&self) -> String {
            format!("counting({})", self.result)
        }
    }

    #[test]
    fn test_and_truth_table() {
        let between = greater_than(0).and(less_than(10));
        assert!(between.is_satisfied(&5));
        assert!(!between.is_satisfied(&0));
        assert!(!between.is_satisfied(&10));
        assert_eq!(between.name(), "(> 0 AND < 10)");
    }

    #[test]
    fn test_or_truth_table() {
        let outside = less_than(0).or(greater_than(10));
        assert!(outside.is_satisfied(&-1));
        assert!(outside.is_satisfied(&11));
        assert!(!outside.is_satisfied(&5));
    }

    #[test]
    fn test_not() {
        let not_positive = greater_than(0).not();
        assert!(not_positive.is_satisfied(&0));
        assert!(!not_positive.is_satisfied(&1));
        assert_eq!(not_positive.name(), "NOT > 0");
    }

    #[test]
    fn test_and_short_circuits_on_false() {
        let calls = Arc::new(AtomicUsize::new(0));
        let spec = FnSpecification::new("never", |_: &i32| false).and(Counting {
            result: true,
            calls: Arc::clone(&calls),
        });

        assert!(!spec.is_satisfied(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_or_short_circuits_on_true() {
        let calls = Arc::new(AtomicUsize::new(0));
        let spec = FnSpecification::new("always", |_: &i32| true).or(Counting {
            result: false,
            calls: Arc::clone(&calls),
        });

        assert!(spec.is_satisfied(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_and_is_commutative() {
        let a = greater_than(2);
        let b = less_than(8);
        let ab = a.clone().and(b.clone());
        let ba = b.and(a);
        for n in -5..15 {
            assert_eq!(ab.is_satisfied(&n), ba.is_satisfied(&n));
        }
    }

    #[test]
    fn test_all_of() {
        let spec = AllOf::new()
            .with(greater_than(0))
            .with(less_than(10))
            .with(FnSpecification::new("even", |x: &i32| x % 2 == 0));

        assert_eq!(spec.len(), 3);
        assert!(spec.is_satisfied(&4));
        assert!(!spec.is_satisfied(&5));
        assert!(!spec.is_satisfied(&12));
        assert_eq!(spec.name(), "(> 0 AND < 10 AND even)");
    }

    #[test]
    fn test_any_of() {
        let spec = AnyOf::new().with(less_than(0)).with(greater_than(100));
        assert!(spec.is_satisfied(&-3));
        assert!(spec.is_satisfied(&101));
        assert!(!spec.is_satisfied(&50));
    }

    #[test]
    fn test_empty_builders() {
        let all: AllOf<i32> = AllOf::new();
        let any: AnyOf<i32> = AnyOf::new();
        assert!(all.is_empty());
        assert!(all.is_satisfied(&1));
        assert!(!any.is_satisfied(&1));
        assert_eq!(all.name(), "TRUE");
        assert_eq!(any.name(), "FALSE");
    }

    #[test]
    fn test_try_from_specs_rejects_empty() {
        let err = AllOf::<i32>::try_from_specs(Vec::new()).err().unwrap();
        assert!(matches!(err, SpecificationError::InvalidArgument(_)));

        let err = AnyOf::<i32>::try_from_specs(Vec::new()).err().unwrap();
        assert!(matches!(err, SpecificationError::InvalidArgument(_)));
    }

    #[test]
    fn test_try_from_specs_single_child() {
        let spec = AllOf::try_from_specs(vec![greater_than(3).boxed()]).unwrap();
        assert!(spec.is_satisfied(&4));
        assert_eq!(spec.name(), "> 3");
    }
}
