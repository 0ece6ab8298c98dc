//! Match products by name.
//!
//! Two modes: exact (case-sensitive) equality, or a case-insensitive
//! substring search like the CLI's `--name` flag.

use crate::traits::Specification;
use catalog::Product;

#[derive(Debug, Clone, PartialEq, Eq)]
enum NameMatch {
    Exact(String),
    /// Stored lower-cased
    Contains(String),
}

/// Satisfied by products whose name matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSpecification {
    pattern: NameMatch,
}

impl NameSpecification {
    /// Name must equal `name` exactly.
    pub fn exact(name: impl Into<String>) -> Self {
        Self {
            pattern: NameMatch::Exact(name.into()),
        }
    }

    /// Name must contain `text`, ignoring case.
    pub fn contains(text: impl AsRef<str>) -> Self {
        Self {
            pattern: NameMatch::Contains(text.as_ref().to_lowercase()),
        }
    }
}

impl Specification<Product> for NameSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        match &self.pattern {
            NameMatch::Exact(name) => item.name == *name,
            NameMatch::Contains(text) => item.name.to_lowercase().contains(text.as_str()),
        }
    }

    fn name(&self) -> String {
        match &self.pattern {
            NameMatch::Exact(name) => format!("name == {:?}", name),
            NameMatch::Contains(text) => format!("name contains {:?}", text),
        }
    }
}
