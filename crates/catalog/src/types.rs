//! Core item types filtered by the specification crate.
//!
//! A `Product` carries a name plus two enumerated attributes, `Color` and
//! `Size`. Products have no identity beyond structural equality.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Attribute Enums
// =============================================================================

/// Color category of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// All colors, in declaration order
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
        };
        f.write_str(s)
    }
}

impl FromStr for Color {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RED" => Ok(Color::Red),
            "GREEN" => Ok(Color::Green),
            "BLUE" => Ok(Color::Blue),
            _ => Err(CatalogError::InvalidValue {
                field: "color".to_string(),
                value: s.to_string(),
                line: None,
            }),
        }
    }
}

/// Size category of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Small,
    Medium,
    Large,
    Huge,
}

impl Size {
    /// All sizes, smallest first
    pub const ALL: [Size; 4] = [Size::Small, Size::Medium, Size::Large, Size::Huge];
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Size::Small => "SMALL",
            Size::Medium => "MEDIUM",
            Size::Large => "LARGE",
            Size::Huge => "HUGE",
        };
        f.write_str(s)
    }
}

impl FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SMALL" => Ok(Size::Small),
            "MEDIUM" => Ok(Size::Medium),
            "LARGE" => Ok(Size::Large),
            "HUGE" => Ok(Size::Huge),
            _ => Err(CatalogError::InvalidValue {
                field: "size".to_string(),
                value: s.to_string(),
                line: None,
            }),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.color, self.size)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered collection of products.
///
/// Order is the insertion order and is what filters preserve. Filtering
/// only ever borrows the products, so a catalog can be filtered any number
/// of times without being changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Consume the catalog, returning the owned products
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

/// The apple/tree/house catalog used throughout the docs and tests
pub fn sample_catalog() -> Catalog {
    Catalog::from(vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ])
}
