//! Per-file patch outcome types.

use std::fmt;

/// Outcome of patching one project file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Old marker absent - nothing written
    NoMatch,
    /// All occurrences replaced and written back
    Updated { count: usize },
    /// Dry run - replacement verified but not written
    DryRun { count: usize },
    /// New-marker count differed from old-marker count - nothing written
    VerificationFailed { expected: usize, actual: usize },
    /// File could not be read or written
    Io(String),
}

impl FileOutcome {
    /// True when the file reached the updated state (or would have, in a dry run)
    pub fn is_updated(&self) -> bool {
        matches!(self, FileOutcome::Updated { .. } | FileOutcome::DryRun { .. })
    }

    /// True for verification and IO failures
    pub fn is_error(&self) -> bool {
        matches!(self, FileOutcome::VerificationFailed { .. } | FileOutcome::Io(_))
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::NoMatch => write!(f, "No old toolset found"),
            FileOutcome::Updated { count } => write!(f, "Updated {} occurrence(s)", count),
            FileOutcome::DryRun { count } => write!(f, "Would update {} occurrence(s)", count),
            FileOutcome::VerificationFailed { expected, actual } => {
                write!(f, "Replacement verification failed: expected {}, got {}", expected, actual)
            }
            FileOutcome::Io(msg) => write!(f, "Error: {}", msg),
        }
    }
}
