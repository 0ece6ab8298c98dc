//! Specification implementations for catalog products.
//!
//! Each leaf closes over the value it compares against and can be
//! combined with any other specification via `SpecificationExt`.

pub mod color;
pub mod name;
pub mod size;

// Re-export for convenience
pub use color::ColorSpecification;
pub use name::NameSpecification;
pub use size::SizeSpecification;
