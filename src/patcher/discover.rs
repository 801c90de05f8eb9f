//! Project file discovery

use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Recursively find files under `root` with the given extension.
///
/// A missing root yields an empty list. Entries the walker cannot read are
/// logged and skipped.
pub fn discover(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        debug!("discover: {} is not a directory", root.display());
        return Ok(Vec::new());
    }

    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    let pattern = format!("{}/**/*.{}", escaped_root, extension);
    debug!("discover: pattern={}", pattern);

    let mut files: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable path {}: {}", e.path().display(), e);
                None
            }
        })
        .filter(|p| p.is_file())
        .collect();

    files.sort();
    Ok(files)
}
