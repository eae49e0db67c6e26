//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - There are no subcommands: one invocation runs the whole install
//! - Flags only tune inputs and presentation, never the sequence

use std::path::PathBuf;

use clap::Parser;

use crate::config::DeployConfig;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Install raspberry-web from a local build
#[derive(Parser, Debug)]
#[command(name = "raspberry-web-deploy")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Run from the repository's scripts/ directory after `cargo build --release`."
)]
pub struct Cli {
    /// Checkout to deploy from (default: parent of the working directory)
    #[arg(long, value_name = "DIR")]
    pub build_root: Option<PathBuf>,

    /// Staging prefix prepended to every target path
    #[arg(long, value_name = "DIR")]
    pub destdir: Option<PathBuf>,

    /// Config file (default: ./rwdeploy.toml when present)
    #[arg(long, value_name = "FILE", env = "RWDEPLOY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v prints state transitions)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply flag values on top of the file and environment configuration.
    pub fn apply_overrides(&self, mut config: DeployConfig) -> DeployConfig {
        if let Some(root) = &self.build_root {
            config.paths.build_root = Some(root.clone());
        }
        if let Some(destdir) = &self.destdir {
            config.paths.destdir = Some(destdir.clone());
        }
        config
    }
}
