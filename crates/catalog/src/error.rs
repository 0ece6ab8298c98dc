//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while reading or parsing a product catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading the catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A field had a value outside its enumeration.
    ///
    /// `line` is set when the value came from a catalog line, and is
    /// `None` when parsing a bare value (e.g. a CLI argument).
    #[error("Invalid value for {field}: {value}{}", line_suffix(.line))]
    InvalidValue {
        field: String,
        value: String,
        line: Option<usize>,
    },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// Product name was blank
    #[error("Empty product name in line {line}")]
    EmptyName { line: usize },
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!(" in line {}", line),
        None => String::new(),
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
