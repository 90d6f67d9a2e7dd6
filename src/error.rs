// src/error.rs
//! Error handling for smartphone-factory.

#![deny(missing_docs)]

/// FactoryResult is alias for anyhow
pub type FactoryResult<T> = anyhow::Result<T>;
