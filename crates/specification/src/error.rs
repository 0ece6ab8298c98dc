//! Error types for the specification crate.
//!
//! Evaluating a specification can never fail. The only error is handing a
//! constructor something it cannot turn into a meaningful predicate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecificationError {
    /// A constructor received an argument with no sensible meaning,
    /// e.g. a compound specification with no children
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SpecificationError>;
