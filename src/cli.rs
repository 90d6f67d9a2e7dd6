//! CLI argument parser for smartphone-factory.

#![deny(missing_docs)]

use crate::factory::FactoryKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Run toy smartphone companies and print what they produce.
#[derive(Parser, Debug)]
#[command(
    name = "smartphone-factory",
    version,
    about = "Run toy smartphone companies and print what they produce",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Set verbosity level: -v=1, -v=2, -v=3
    #[arg(
        short = 'v',
        long = "verbose",
        value_name = "LEVEL",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=3),
        global = true
    )]
    pub verbose: u8,

    /// Silence all logging (overrides -v).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands supported by the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize project configuration.
    Init {
        /// Directory where configuration should live (defaults to pwd).
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite existing configuration if present.
        #[arg(long)]
        force: bool,
    },

    /// Run every configured company and print its box.
    Run {
        /// Directory holding the configuration. Defaults to ".".
        target: Option<PathBuf>,
    },

    /// Run a single company and print its box.
    Produce {
        /// Which factory the company runs.
        #[arg(value_enum)]
        factory: FactoryKind,

        /// Directory holding the configuration. Defaults to ".".
        target: Option<PathBuf>,
    },

    /// Print item count and total weight of one company's box.
    Weigh {
        /// Which factory the company runs.
        #[arg(value_enum)]
        factory: FactoryKind,

        /// Directory holding the configuration. Defaults to ".".
        target: Option<PathBuf>,
    },
}
