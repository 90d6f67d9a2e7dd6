// src/product_box.rs
//! A generic, immutable box of products.

#![deny(missing_docs)]

use crate::product::Product;
use std::fmt;

/// Header line printed before the item listing.
pub const BOX_HEADER: &str = "The box contains the following items:";

/// Ordered, fixed-length collection of products.
///
/// Total weight is not stored; [`ProductBox::weight`] sums the items.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductBox<T: Product> {
    items: Vec<T>,
}

impl<T: Product> ProductBox<T> {
    /// Pack `items` in the given order.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Sum of item weights; `0.0` for an empty box.
    pub fn weight(&self) -> f64 {
        self.items
            .iter()
            .map(Product::weight)
            .fold(0.0, |acc, w| acc + w)
    }

    /// Items in packing order.
    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the box holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items in packing order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Product> From<Vec<T>> for ProductBox<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Product> FromIterator<T> for ProductBox<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T: Product> IntoIterator for &'a ProductBox<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Something that can render a human-readable listing of itself.
pub trait Describe {
    /// Multi-line description.
    fn describe(&self) -> String;
}

/// A box is describable only when its items are.
impl<T: Product + fmt::Display> Describe for ProductBox<T> {
    fn describe(&self) -> String {
        let mut lines = Vec::with_capacity(self.items.len() + 1);
        lines.push(BOX_HEADER.to_string());
        lines.extend(
            self.items
                .iter()
                .enumerate()
                .map(|(i, item)| format!("{}. {}", i + 1, item)),
        );
        lines.join("\n")
    }
}

impl<T: Product + fmt::Display> fmt::Display for ProductBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
