//! # Catalog Crate
//!
//! Item types that the specification crate filters, and a loader for
//! plain-text product catalogs.
//!
//! ## Main Components
//!
//! - **types**: `Product`, `Color`, `Size` and the ordered `Catalog`
//! - **parser**: Parse `name::COLOR::SIZE` files into a `Catalog`
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::load_catalog;
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("data/products.txt"))?;
//! for product in &catalog {
//!     println!("{}", product);
//! }
//! ```

pub mod error;
pub mod parser;
pub mod types;

pub use error::{CatalogError, Result};
pub use parser::{load_catalog, parse_catalog, parse_product};
pub use types::{sample_catalog, Catalog, Color, Product, Size};
