//! Per-criterion product filter.
//!
//! One method per attribute combination. Every new criterion means a new
//! method here, which is exactly what `SpecFilter` avoids. The methods
//! delegate to the specification types so both paths agree item for item.

use catalog::{Color, Product, Size};

use crate::filter::filter;
use crate::specs::{ColorSpecification, SizeSpecification};
use crate::traits::SpecificationExt;

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter;

impl ProductFilter {
    pub fn filter_by_color<'a>(&self, products: &'a [Product], color: Color) -> Vec<&'a Product> {
        let spec = ColorSpecification::new(color);
        filter(products, &spec).collect()
    }

    pub fn filter_by_size<'a>(&self, products: &'a [Product], size: Size) -> Vec<&'a Product> {
        let spec = SizeSpecification::new(size);
        filter(products, &spec).collect()
    }

    pub fn filter_by_color_and_size<'a>(
        &self,
        products: &'a [Product],
        color: Color,
        size: Size,
    ) -> Vec<&'a Product> {
        let spec = ColorSpecification::new(color).and(SizeSpecification::new(size));
        filter(products, &spec).collect()
    }
}
