// src/any_factory.rs
//! Type-erased factories.
//!
//! Two factories with `Output = Smartphone` are still distinct types and
//! cannot sit in the same field or collection. [`AnyFactory<P>`] hides the
//! concrete factory behind a trait object so callers only see the product
//! type `P`.

#![deny(missing_docs)]

use crate::factory::Factory;
use crate::product::Product;
use crate::product_box::ProductBox;
use std::fmt;

/// Object-safe view of a [`Factory`] with a fixed output.
trait ErasedFactory<P: Product> {
    fn produce_erased(&self) -> ProductBox<P>;
    fn type_name(&self) -> &'static str;
}

impl<F> ErasedFactory<F::Output> for F
where
    F: Factory,
{
    #[inline]
    fn produce_erased(&self) -> ProductBox<F::Output> {
        self.produce()
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<F>()
    }
}

/// A factory producing `P`, whatever its concrete type.
pub struct AnyFactory<P: Product> {
    inner: Box<dyn ErasedFactory<P>>,
}

impl<P: Product> AnyFactory<P> {
    /// Take ownership of `factory` and erase its type.
    pub fn new<F>(factory: F) -> Self
    where
        F: Factory<Output = P> + 'static,
    {
        Self {
            inner: Box::new(factory),
        }
    }

    /// Forward to the wrapped factory.
    #[inline]
    pub fn produce(&self) -> ProductBox<P> {
        self.inner.produce_erased()
    }

    /// Type name of the wrapped factory, for diagnostics.
    pub fn wrapped_type_name(&self) -> &'static str {
        self.inner.type_name()
    }
}

impl<P: Product> Factory for AnyFactory<P> {
    type Output = P;

    fn produce(&self) -> ProductBox<P> {
        AnyFactory::produce(self)
    }
}

impl<P: Product> fmt::Debug for AnyFactory<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyFactory")
            .field("wrapped", &self.wrapped_type_name())
            .finish()
    }
}
