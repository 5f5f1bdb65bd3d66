//! CLI argument definitions for xcforge.
//!
//! Uses `clap` derive macros to define the full command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "xcforge",
    version,
    about = "Clone a project's main build target into fully-configured variants",
    long_about = "xcforge reads a .xcforge.json manifest and clones the project's main \
                  target into new targets: build phases, per-target Info.plist overrides, \
                  remote asset catalogs, launch videos, and mirrored resource groups."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Suppress status output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a .xcforge.json manifest in the project directory
    Init {
        /// Directory where the project file and .xcforge.json live
        #[arg(short, long)]
        directory: Option<PathBuf>,
    },

    /// Synthesize every target listed in the manifest
    Sync {
        /// Directory where the project file and .xcforge.json live
        #[arg(short, long)]
        directory: Option<PathBuf>,
        /// HTTP timeout in seconds for asset and video downloads
        #[arg(long)]
        timeout: Option<u64>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
