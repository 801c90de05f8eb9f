//! Error types for toolfix
//!
//! Run-level failures only. Per-file problems are reported as
//! [`FileOutcome`](crate::domain::FileOutcome) values and never abort a batch.

use std::path::PathBuf;
use thiserror::Error;

/// All error types that can terminate a patch run
#[derive(Debug, Error)]
pub enum PatchError {
    /// Root directory to scan does not exist
    #[error("Project directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Root exists but holds no project files
    #[error("No .{extension} files found under {}", .root.display())]
    NoProjectFiles { root: PathBuf, extension: String },

    /// Invalid glob pattern built from the root and extension
    #[error("Glob error: {0}")]
    Glob(#[from] glob::PatternError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for toolfix operations
pub type Result<T> = std::result::Result<T, PatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_not_found_error() {
        let err = PatchError::RootNotFound(PathBuf::from("external/vs2019"));
        assert_eq!(err.to_string(), "Project directory not found: external/vs2019");
    }

    #[test]
    fn test_no_project_files_error() {
        let err = PatchError::NoProjectFiles {
            root: PathBuf::from("vs2019"),
            extension: "vcxproj".to_string(),
        };
        assert_eq!(err.to_string(), "No .vcxproj files found under vs2019");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PatchError = io_err.into();
        assert!(matches!(err, PatchError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_glob_error_conversion() {
        let pattern_err = glob::Pattern::new("a/***").unwrap_err();
        let err: PatchError = pattern_err.into();
        assert!(matches!(err, PatchError::Glob(_)));
    }
}
