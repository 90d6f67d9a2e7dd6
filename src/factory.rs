// src/factory.rs
//! Factory capability and the concrete smartphone factories.

#![deny(missing_docs)]

use crate::any_factory::AnyFactory;
use crate::product::{Product, Smartphone};
use crate::product_box::ProductBox;
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Produces boxes of a single product type fixed by the implementer.
pub trait Factory {
    /// The product this factory packs.
    type Output: Product;

    /// Produce a fresh box. Calls are independent of one another.
    fn produce(&self) -> ProductBox<Self::Output>;

    /// Move this factory into an [`AnyFactory`].
    fn erase(self) -> AnyFactory<Self::Output>
    where
        Self: Sized + 'static,
    {
        AnyFactory::new(self)
    }
}

/// Size and per-item weight of a production run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Items per box.
    pub count: usize,
    /// Weight of each item, in kilograms.
    pub weight_kg: f64,
}

impl Default for Batch {
    fn default() -> Self {
        Self {
            count: 3,
            weight_kg: 0.137,
        }
    }
}

impl Batch {
    fn smartphones(&self, color: &str) -> ProductBox<Smartphone> {
        (0..self.count)
            .map(|_| Smartphone::new(self.weight_kg, color))
            .collect()
    }
}

macro_rules! define_smartphone_factories {
    ( $( $name:ident => $color:literal ; )* ) => {
        $(
            #[doc = concat!("Packs ", $color, " smartphones.")]
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $name {
                batch: Batch,
            }

            impl $name {
                /// Factory producing the given batch.
                pub fn with_batch(batch: Batch) -> Self {
                    Self { batch }
                }
            }

            impl Factory for $name {
                type Output = Smartphone;

                fn produce(&self) -> ProductBox<Smartphone> {
                    tracing::trace!(factory = stringify!($name), count = self.batch.count, "producing");
                    self.batch.smartphones($color)
                }
            }
        )*
    };
}

define_smartphone_factories! {
    BlueSmartphoneFactory => "Blue";
    RedSmartphoneFactory  => "Red";
}

/// The concrete factory variants a company can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FactoryKind {
    /// [`RedSmartphoneFactory`].
    Red,
    /// [`BlueSmartphoneFactory`].
    Blue,
}

impl FactoryKind {
    /// Color label of the smartphones this variant produces.
    pub fn color(self) -> &'static str {
        match self {
            FactoryKind::Red => "Red",
            FactoryKind::Blue => "Blue",
        }
    }

    /// Build the matching factory and erase its concrete type.
    pub fn erased(self, batch: Batch) -> AnyFactory<Smartphone> {
        match self {
            FactoryKind::Red => AnyFactory::new(RedSmartphoneFactory::with_batch(batch)),
            FactoryKind::Blue => AnyFactory::new(BlueSmartphoneFactory::with_batch(batch)),
        }
    }
}

impl fmt::Display for FactoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color())
    }
}

impl FromStr for FactoryKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("red") {
            Ok(FactoryKind::Red)
        } else if s.eq_ignore_ascii_case("blue") {
            Ok(FactoryKind::Blue)
        } else {
            bail!("unknown factory: {s} (expected red or blue)")
        }
    }
}
