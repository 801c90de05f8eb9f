//! Per-file toolset patching
//!
//! Read, count, replace, verify, write. A file is only rewritten when the
//! new-marker count after replacement equals the old-marker count before it.

use log::{debug, info, warn};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use super::marker::Markers;
use crate::domain::FileOutcome;

/// Patch a single project file in place.
pub fn patch_file(path: &Path, markers: &Markers, dry_run: bool) -> FileOutcome {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return FileOutcome::Io(format!("failed to read {}: {}", path.display(), e));
        }
    };

    let (updated, outcome) = apply(&content, markers);
    let count = match outcome {
        FileOutcome::Updated { count } => count,
        other => {
            debug!("{}: {:?}", path.display(), other);
            return other;
        }
    };

    if dry_run {
        info!("Dry run: {} occurrence(s) in {}", count, path.display());
        return FileOutcome::DryRun { count };
    }

    if let Err(e) = write_atomic(path, &updated) {
        warn!("Failed to write {}: {}", path.display(), e);
        return FileOutcome::Io(format!("failed to write {}: {}", path.display(), e));
    }

    info!("Updated {} occurrence(s) in {}", count, path.display());
    FileOutcome::Updated { count }
}

/// Replace markers in `content` and verify the result.
///
/// Returns the rewritten text alongside the outcome. The text is only
/// meaningful when the outcome is `Updated`.
pub fn apply(content: &str, markers: &Markers) -> (String, FileOutcome) {
    let expected = markers.count_old(content);
    if expected == 0 {
        return (String::new(), FileOutcome::NoMatch);
    }

    let updated = markers.replace(content);
    let actual = markers.count_new(&updated);
    if actual != expected {
        return (String::new(), FileOutcome::VerificationFailed { expected, actual });
    }

    (updated, FileOutcome::Updated { count: expected })
}

/// Write `content` over `path` via a sibling temp file and rename.
///
/// Symlinks are resolved first so the link target is rewritten and the
/// link itself survives.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let target = fs::canonicalize(path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("/"));
    let permissions = fs::metadata(&target)?.permissions();

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
