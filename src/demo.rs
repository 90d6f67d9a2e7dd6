// src/demo.rs
//! The smartphone-company demonstration.

#![deny(missing_docs)]

use crate::company::Company;
use crate::config::Config;
use crate::error::FactoryResult;
use crate::factory::FactoryKind;
use crate::product_box::Describe;
use std::io::Write;

/// Line printed before a company's box.
pub fn announcement(kind: FactoryKind) -> String {
    format!("{} Smartphone Company produced a box of smartphones", kind)
}

/// Build a company for `kind`, produce one box and write the report to `out`.
pub fn report(kind: FactoryKind, cfg: &Config, out: &mut impl Write) -> FactoryResult<()> {
    let company = Company::new(kind.erased(cfg.batch));
    tracing::debug!(factory = company.factory().wrapped_type_name(), "company ready");
    let product_box = company.produce();
    tracing::info!(%kind, items = product_box.len(), weight = product_box.weight(), "box produced");
    writeln!(out, "{}", announcement(kind))?;
    writeln!(out, "{}", product_box.describe())?;
    Ok(())
}

/// Run every configured company in order.
pub fn run(cfg: &Config, out: &mut impl Write) -> FactoryResult<()> {
    for &kind in &cfg.companies {
        report(kind, cfg, out)?;
    }
    Ok(())
}
