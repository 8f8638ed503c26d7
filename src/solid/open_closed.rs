//! Filtering products: a filter class that grows a method per criterion,
//! versus specifications that compose without touching the filter.

use crate::config::PatternsConfig;
use crate::error::{require_non_blank, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
    Huge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: &str, color: Color, size: Size) -> Result<Self> {
        require_non_blank("name", name)?;
        Ok(Self {
            name: name.to_string(),
            color,
            size,
        })
    }
}

/// Every new criterion means another method here.
pub struct ProductFilter;

impl ProductFilter {
    pub fn by_color(products: &[Product], color: Color) -> impl Iterator<Item = &Product> {
        products.iter().filter(move |p| p.color == color)
    }

    pub fn by_size(products: &[Product], size: Size) -> impl Iterator<Item = &Product> {
        products.iter().filter(move |p| p.size == size)
    }

    pub fn by_size_and_color(
        products: &[Product],
        size: Size,
        color: Color,
    ) -> impl Iterator<Item = &Product> {
        products.iter().filter(move |p| p.size == size && p.color == color)
    }
}

pub trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;
}

pub trait Filter<T> {
    fn filter<'a>(&self, items: &'a [T], spec: &'a dyn Specification<T>) -> Vec<&'a T>;
}

pub struct ColorSpecification(pub Color);

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.0
    }
}

pub struct SizeSpecification(pub Size);

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.0
    }
}

pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A: Specification<T>, B: Specification<T>> Specification<T> for AndSpecification<A, B> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

pub struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn filter<'a>(&self, items: &'a [T], spec: &'a dyn Specification<T>) -> Vec<&'a T> {
        items.iter().filter(|item| spec.is_satisfied(item)).collect()
    }
}

pub fn sample_products() -> Result<Vec<Product>> {
    Ok(vec![
        Product::new("Apple", Color::Green, Size::Small)?,
        Product::new("Tree", Color::Green, Size::Large)?,
        Product::new("House", Color::Blue, Size::Large)?,
    ])
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let products = sample_products()?;

    writeln!(out, "Green products (old):")?;
    for p in ProductFilter::by_color(&products, Color::Green) {
        writeln!(out, " - {} is green", p.name)?;
    }

    let bf = BetterFilter;
    writeln!(out, "Green products (new):")?;
    for p in bf.filter(&products, &ColorSpecification(Color::Green)) {
        writeln!(out, " - {} is green", p.name)?;
    }

    writeln!(out, "Large products:")?;
    for p in bf.filter(&products, &SizeSpecification(Size::Large)) {
        writeln!(out, " - {} is large", p.name)?;
    }

    writeln!(out, "Large blue items:")?;
    let large_blue = AndSpecification::new(ColorSpecification(Color::Blue), SizeSpecification(Size::Large));
    for p in bf.filter(&products, &large_blue) {
        writeln!(out, " - {} is big and blue", p.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(items: impl IntoIterator<Item = &'a Product>) -> Vec<&'a str> {
        items.into_iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_old_and_new_filters_agree() {
        let products = sample_products().unwrap();
        let spec = AndSpecification::new(SizeSpecification(Size::Large), ColorSpecification(Color::Green));
        assert_eq!(
            names(ProductFilter::by_size_and_color(&products, Size::Large, Color::Green)),
            names(BetterFilter.filter(&products, &spec))
        );
        assert_eq!(names(ProductFilter::by_size(&products, Size::Small)), vec!["Apple"]);
        assert!(BetterFilter.filter(&products, &ColorSpecification(Color::Red)).is_empty());
    }

    #[test]
    fn test_blank_product_name_is_rejected() {
        assert!(Product::new("", Color::Red, Size::Medium).is_err());
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Green products (old):\n - Apple is green\n - Tree is green\n\
             Green products (new):\n - Apple is green\n - Tree is green\n\
             Large products:\n - Tree is large\n - House is large\n\
             Large blue items:\n - House is big and blue\n"
        );
    }
}
