// src/product.rs
//! Products that can be packed into a box.

#![deny(missing_docs)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that can be weighed.
pub trait Product {
    /// Weight in kilograms. Never negative.
    fn weight(&self) -> f64;
}

/// A smartphone, identified only by its weight and color label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Smartphone {
    weight: f64,
    color: String,
}

impl Smartphone {
    /// Build a smartphone of the given weight (kg) and color label.
    pub fn new(weight: f64, color: impl Into<String>) -> Self {
        Self {
            weight,
            color: color.into(),
        }
    }

    /// Color label.
    #[inline]
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl Product for Smartphone {
    #[inline]
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for Smartphone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Smartphone. Specs: weight: {} kg, color: {}",
            self.weight, self.color
        )
    }
}
