//! Match products of one color.

use crate::traits::Specification;
use catalog::{Color, Product};

/// Satisfied by products whose color equals the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }

    fn name(&self) -> String {
        format!("color == {}", self.color)
    }
}
