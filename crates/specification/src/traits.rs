//! Core traits for predicate composition.
//!
//! A `Specification<T>` answers one question about an item: does it
//! satisfy this criterion? New criteria are new implementations; the
//! filter and the existing specifications never change to accommodate them.

use std::fmt;
use std::sync::Arc;

use crate::compound::{AndSpecification, NotSpecification, OrSpecification};

/// A named, pure predicate over `T`.
///
/// ## Contract
/// - `is_satisfied` has no side effects and is deterministic: the same
///   item always yields the same answer.
/// - `Send + Sync` lets one instance be shared by concurrent filter passes.
pub trait Specification<T: ?Sized>: Send + Sync {
    /// Returns true iff `item` meets this criterion.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Human-readable description (for logging/debugging)
    fn name(&self) -> String;
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

/// Combinators available on every specification.
///
/// Each combinator takes ownership of its operands and returns a new
/// specification; the operands themselves are left untouched. Wrap a
/// child in `Arc` (or pass a reference) to share it between trees.
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    /// Both `self` and `other` must hold.
    fn and<S: Specification<T>>(self, other: S) -> AndSpecification<Self, S> {
        AndSpecification::new(self, other)
    }

    /// Either `self` or `other` must hold.
    fn or<S: Specification<T>>(self, other: S) -> OrSpecification<Self, S> {
        OrSpecification::new(self, other)
    }

    /// Negation of `self`.
    fn not(self) -> NotSpecification<Self> {
        NotSpecification::new(self)
    }

    /// Erase the concrete type, e.g. to store heterogeneous specifications.
    fn boxed<'a>(self) -> Box<dyn Specification<T> + 'a>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}

/// Adapts a closure into a named specification.
///
/// ```ignore
/// let tiny = FnSpecification::new("size == SMALL", |p: &Product| p.size == Size::Small);
/// ```
#[derive(Clone)]
pub struct FnSpecification<F> {
    name: String,
    predicate: F,
}

impl<F> FnSpecification<F> {
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<T: ?Sized, F> Specification<T> for FnSpecification<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (self.predicate)(item)
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

impl<F> fmt::Debug for FnSpecification<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSpecification")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
