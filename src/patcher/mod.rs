//! Toolset patcher
//!
//! Walks a project tree, retargets every `<PlatformToolset>` marker from one
//! version to another, and tallies per-file outcomes into a [`RunReport`].

pub mod discover;
pub mod marker;
pub mod patch;
pub mod report;

pub use discover::discover;
pub use marker::{DEFAULT_FROM_TOOLSET, DEFAULT_TO_TOOLSET, Markers};
pub use patch::patch_file;
pub use report::RunReport;

use colored::*;
use log::info;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::FileOutcome;
use crate::error::{PatchError, Result};

/// Settings for a single run, resolved from config and CLI
#[derive(Debug, Clone)]
pub struct PatchOptions {
    pub root: PathBuf,
    pub extension: String,
    pub markers: Markers,
    pub dry_run: bool,
    pub count_unmatched_as_failure: bool,
}

impl From<&Config> for PatchOptions {
    fn from(config: &Config) -> Self {
        Self {
            root: config.root.clone(),
            extension: config.extension.clone(),
            markers: Markers::new(&config.from_toolset, &config.to_toolset),
            dry_run: config.dry_run,
            count_unmatched_as_failure: config.count_unmatched_as_failure,
        }
    }
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Discover and patch every project file under the configured root.
///
/// Missing root and empty trees are errors; per-file failures are recorded
/// in the returned report.
pub fn run(opts: &PatchOptions) -> Result<RunReport> {
    let root_meta = match fs::metadata(&opts.root) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PatchError::RootNotFound(opts.root.clone()));
        }
        Err(e) => return Err(e.into()),
    };
    if !root_meta.is_dir() {
        return Err(PatchError::RootNotFound(opts.root.clone()));
    }

    let files = discover(&opts.root, &opts.extension)?;
    if files.is_empty() {
        return Err(PatchError::NoProjectFiles {
            root: opts.root.clone(),
            extension: opts.extension.clone(),
        });
    }

    info!("Found {} project files under {}", files.len(), opts.root.display());
    println!("Found {} project files:", files.len());
    for f in &files {
        println!("  - {}", f.display());
    }
    println!();
    println!("{} {} -> {}", "Retargeting".cyan(), opts.markers.old, opts.markers.new);

    let mut report = RunReport::new(opts.count_unmatched_as_failure);
    for path in files {
        println!("Processing: {}", path.display());
        let outcome = patch_file(&path, &opts.markers, opts.dry_run);
        print_outcome(&outcome);
        report.record(path, outcome);
    }

    info!(
        "Run finished: {}/{} updated, {} unmatched, {} errors",
        report.updated(),
        report.total(),
        report.unmatched(),
        report.errors()
    );
    Ok(report)
}

fn print_outcome(outcome: &FileOutcome) {
    let line = format!("  {}", outcome);
    match outcome {
        FileOutcome::Updated { .. } | FileOutcome::DryRun { .. } => println!("{}", line.green()),
        FileOutcome::NoMatch => println!("{}", line.dimmed()),
        FileOutcome::VerificationFailed { .. } | FileOutcome::Io(_) => println!("{}", line.red()),
    }
}

/// Print the closing summary for a finished run
pub fn print_summary(report: &RunReport) {
    println!("{}", "-".repeat(40));
    println!("Results: {}/{} files successfully updated", report.updated(), report.total());
    if report.is_success() {
        println!("{}", "All project files retargeted.".green());
    } else {
        println!(
            "{}",
            format!("{} files had issues - manual review recommended", report.failed()).yellow()
        );
        if report.errors() > 0 {
            println!("{}", format!("{} files failed verification or IO", report.errors()).red());
        }
    }
}
