// src/company.rs
//! A company running one smartphone factory.

#![deny(missing_docs)]

use crate::any_factory::AnyFactory;
use crate::product::Smartphone;
use crate::product_box::ProductBox;

/// Owns exactly one factory and nothing else.
#[derive(Debug)]
pub struct Company {
    factory: AnyFactory<Smartphone>,
}

impl Company {
    /// Company running `factory`.
    pub fn new(factory: AnyFactory<Smartphone>) -> Self {
        Self { factory }
    }

    /// The factory this company runs.
    #[inline]
    pub fn factory(&self) -> &AnyFactory<Smartphone> {
        &self.factory
    }

    /// Shorthand for `self.factory().produce()`.
    pub fn produce(&self) -> ProductBox<Smartphone> {
        self.factory.produce()
    }
}
