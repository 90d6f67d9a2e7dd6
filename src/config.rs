// src/config.rs
//! Configuration file for smartphone-factory

#![deny(missing_docs)]

use crate::error::FactoryResult;
use crate::factory::{Batch, FactoryKind};
use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// File name looked up in the target directory.
pub const CONFIG_FILE: &str = ".smartphone-factory.toml";

/// Config struct for smartphone-factory.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Companies to run, in order.
    pub companies: Vec<FactoryKind>,
    /// Production run shared by every factory.
    pub batch: Batch,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            companies: vec![FactoryKind::Red, FactoryKind::Blue],
            batch: Batch::default(),
        }
    }
}

fn config_dir(dir: &Path) -> &Path {
    if dir.is_file() {
        dir.parent().unwrap_or(dir)
    } else {
        dir
    }
}

impl Config {
    /// Load `.smartphone-factory.toml` from `dir` (or its parent if `dir` is a file).
    /// If missing, return defaults. Ensures `companies` is never empty.
    pub fn load_or_default(dir: &Path) -> FactoryResult<Self> {
        let file = config_dir(dir).join(CONFIG_FILE);
        if !file.exists() {
            tracing::debug!(path = %file.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let s = fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        let mut cfg: Config =
            toml::from_str(&s).with_context(|| format!("parsing {}", file.display()))?;
        if cfg.companies.is_empty() {
            cfg.companies = Config::default().companies;
        }
        cfg.validate()?;
        tracing::debug!(path = %file.display(), ?cfg, "loaded config");
        Ok(cfg)
    }

    /// Write default configs to .smartphone-factory.toml
    pub fn write_default_config_at(dir: &Path, force: bool) -> FactoryResult<PathBuf> {
        let file = config_dir(dir).join(CONFIG_FILE);
        if !file.exists() || force {
            let s = toml::to_string_pretty(&Self::default())?;
            fs::write(&file, s).with_context(|| format!("writing {}", file.display()))?;
        }
        Ok(file)
    }

    /// Reject batches that cannot describe real products.
    pub fn validate(&self) -> FactoryResult<()> {
        let w = self.batch.weight_kg;
        if !w.is_finite() || w < 0.0 {
            bail!("batch.weight_kg must be a non-negative number, got {w}");
        }
        Ok(())
    }
}
