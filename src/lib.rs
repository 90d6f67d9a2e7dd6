// src/lib.rs
//! Smartphone Factory library.
//!
//! A generic [`product_box::ProductBox`], a [`factory::Factory`] trait with an
//! associated output type, and [`any_factory::AnyFactory`] erasing that type.

#![deny(missing_docs)]

pub mod any_factory;
pub mod cli;
pub mod company;
pub mod config;
pub mod demo;
pub mod error;
pub mod factory;
pub mod logging;
pub mod product;
pub mod product_box;
