//! CLI definition using clap.
//!
//! Every flag is optional; with none given the run uses the config file or
//! the built-in defaults.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// toolfix - Retarget Visual Studio project files to a newer platform toolset
#[derive(Parser, Debug)]
#[command(name = "toolfix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory to scan for project files
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Toolset version to replace (e.g. v142)
    #[arg(long)]
    pub from: Option<String>,

    /// Toolset version to write (e.g. v143)
    #[arg(long)]
    pub to: Option<String>,

    /// Count and verify only, write nothing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Do not count files without the old toolset as failures
    #[arg(long)]
    pub allow_unmatched: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Overlay command-line overrides on a loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if let Some(from) = &self.from {
            config.from_toolset = from.clone();
        }
        if let Some(to) = &self.to {
            config.to_toolset = to.clone();
        }
        if self.dry_run {
            config.dry_run = true;
        }
        if self.allow_unmatched {
            config.count_unmatched_as_failure = false;
        }
    }
}
