//! Composable specifications and the filter that applies them.
//!
//! This crate provides:
//! - `Specification` trait: a named, pure predicate over an item type
//! - Compound specifications (AND / OR / NOT, n-ary `AllOf` / `AnyOf`)
//! - `Filter` trait and `SpecFilter` for lazy, order-preserving selection
//! - `ParallelFilter` for order-preserving selection on the Rayon pool
//! - Product specifications (color, size, name) for the `catalog` crate
//!
//! ## Architecture
//! Filtering is closed for modification and open for extension: a new
//! criterion is a new `Specification` implementation (or a closure wrapped
//! in `FnSpecification`), combined with existing ones through
//! `SpecificationExt`. Neither `SpecFilter` nor the existing
//! specifications change.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{sample_catalog, Color, Size};
//! use specification::prelude::*;
//!
//! let catalog = sample_catalog();
//!
//! // Single criterion
//! let green = ColorSpecification::new(Color::Green);
//! for product in SpecFilter.filter(catalog.products(), &green) {
//!     println!(" - {} is green", product.name);
//! }
//!
//! // Combined criteria
//! let large_blue = ColorSpecification::new(Color::Blue)
//!     .and(SizeSpecification::new(Size::Large));
//! let matches: Vec<_> = SpecFilter.filter(catalog.products(), &large_blue).collect();
//! ```

pub mod compound;
pub mod error;
pub mod filter;
pub mod legacy;
pub mod parallel;
pub mod specs;
pub mod traits;

// Re-export main types
pub use compound::{AllOf, AndSpecification, AnyOf, NotSpecification, OrSpecification};
pub use error::{Result, SpecificationError};
pub use filter::{filter, Filter, Filtered, SpecFilter};
pub use legacy::ProductFilter;
pub use parallel::{par_filter, ParallelFilter};
pub use specs::{ColorSpecification, NameSpecification, SizeSpecification};
pub use traits::{FnSpecification, Specification, SpecificationExt};

/// Everything needed to build and apply specifications
pub mod prelude {
    pub use crate::compound::{AllOf, AnyOf};
    pub use crate::filter::{Filter, SpecFilter};
    pub use crate::parallel::ParallelFilter;
    pub use crate::specs::{ColorSpecification, NameSpecification, SizeSpecification};
    pub use crate::traits::{FnSpecification, Specification, SpecificationExt};
}
