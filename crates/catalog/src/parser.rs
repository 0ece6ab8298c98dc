//! Parser for product catalog files.
//!
//! Format, one product per line:
//! - `name::COLOR::SIZE`, e.g. `Apple::GREEN::SMALL`
//! - blank lines and lines starting with `#` are skipped
//! - fields are trimmed; enum values are case-insensitive

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, Color, Product, Size};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

const FIELD_COUNT: usize = 3;

/// Parse a single `name::COLOR::SIZE` line.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_product(line: &str, line_no: usize) -> Result<Product> {
    let parts: Vec<&str> = line.trim().split("::").map(str::trim).collect();
    if parts.len() != FIELD_COUNT {
        return Err(CatalogError::FieldCountMismatch {
            expected: FIELD_COUNT,
            found: parts.len(),
            line: line_no,
        });
    }

    let name = parts[0];
    if name.is_empty() {
        return Err(CatalogError::EmptyName { line: line_no });
    }

    let color: Color = parts[1].parse().map_err(|e| at_line(e, line_no))?;
    let size: Size = parts[2].parse().map_err(|e| at_line(e, line_no))?;

    Ok(Product::new(name, color, size))
}

/// Attach the catalog line number to a value error
fn at_line(err: CatalogError, line_no: usize) -> CatalogError {
    match err {
        CatalogError::InvalidValue { field, value, .. } => CatalogError::InvalidValue {
            field,
            value,
            line: Some(line_no),
        },
        other => other,
    }
}

/// Parse a whole catalog from text, keeping line order
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    for (idx, line) in content.lines().enumerate() {
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }
        catalog.push(parse_product(line_trimmed, idx + 1)?);
    }

    Ok(catalog)
}

/// Read and parse a catalog file
#[instrument]
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let catalog = parse_catalog(&content)?;
    debug!("Loaded {} products", catalog.len());
    Ok(catalog)
}
