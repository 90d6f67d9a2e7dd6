// src/bin/smartphone-factory.rs
//! Smartphone Factory CLI binary.

#![deny(missing_docs)]

use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

use smartphone_factory::cli;
use smartphone_factory::company::Company;
use smartphone_factory::config::Config;
use smartphone_factory::demo;
use smartphone_factory::error::FactoryResult;
use smartphone_factory::logging;

fn load_config(target: Option<PathBuf>) -> FactoryResult<Config> {
    let root = target.unwrap_or_else(|| PathBuf::from("."));
    Config::load_or_default(&root)
}

fn main() -> FactoryResult<()> {
    let args = cli::Cli::parse();
    logging::init(args.verbose, args.quiet);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        // init: writes the default config file.
        cli::Commands::Init { path, force } => {
            let mut root: PathBuf = path.unwrap_or_else(|| PathBuf::from("."));
            if root.is_file()
                && let Some(parent) = root.parent()
            {
                root = parent.to_path_buf();
            }
            let path_written = Config::write_default_config_at(root.as_path(), force)?;
            writeln!(
                out,
                "{} .smartphone-factory.toml at {}",
                if force { "Overwrote" } else { "Initialized" },
                path_written.display()
            )?;
        }
        // run: every configured company, in order.
        cli::Commands::Run { target } => {
            let cfg = load_config(target)?;
            demo::run(&cfg, &mut out)?;
        }
        // produce: a single company.
        cli::Commands::Produce { factory, target } => {
            let cfg = load_config(target)?;
            demo::report(factory, &cfg, &mut out)?;
        }
        // weigh: summary line only.
        cli::Commands::Weigh { factory, target } => {
            let cfg = load_config(target)?;
            let product_box = Company::new(factory.erased(cfg.batch)).produce();
            writeln!(
                out,
                "{} box: {} items, total weight {} kg",
                factory.to_string().bold(),
                product_box.len(),
                format!("{:.3}", product_box.weight()).green()
            )?;
        }
    }
    out.flush()?;
    Ok(())
}
