//! Run-level tally and success policy

use std::path::PathBuf;

use crate::domain::FileOutcome;

/// Outcomes for every discovered file, in discovery order
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub entries: Vec<(PathBuf, FileOutcome)>,
    /// When true, a file with no old marker counts against the run
    pub count_unmatched_as_failure: bool,
}

impl RunReport {
    pub fn new(count_unmatched_as_failure: bool) -> Self {
        Self {
            entries: Vec::new(),
            count_unmatched_as_failure,
        }
    }

    pub fn record(&mut self, path: PathBuf, outcome: FileOutcome) {
        self.entries.push((path, outcome));
    }

    /// Files that reached the updated state
    pub fn updated(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_updated()).count()
    }

    /// Files with no old marker
    pub fn unmatched(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| matches!(o, FileOutcome::NoMatch))
            .count()
    }

    /// Files that failed verification or hit an IO error
    pub fn errors(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_error()).count()
    }

    /// Files counted in the summary denominator
    pub fn total(&self) -> usize {
        if self.count_unmatched_as_failure {
            self.entries.len()
        } else {
            self.entries.len() - self.unmatched()
        }
    }

    /// Files counted as not successfully updated
    pub fn failed(&self) -> usize {
        self.total() - self.updated()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Process exit code for this report
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(strict: bool, outcomes: Vec<FileOutcome>) -> RunReport {
        let mut r = RunReport::new(strict);
        for (i, o) in outcomes.into_iter().enumerate() {
            r.record(PathBuf::from(format!("p{}.vcxproj", i)), o);
        }
        r
    }

    #[test]
    fn test_all_updated() {
        let r = report(true, vec![FileOutcome::Updated { count: 1 }, FileOutcome::Updated { count: 4 }]);
        assert_eq!(r.updated(), 2);
        assert_eq!(r.total(), 2);
        assert!(r.is_success());
        assert_eq!(r.exit_code(), 0);
    }

    #[test]
    fn test_unmatched_fails_when_strict() {
        let r = report(true, vec![FileOutcome::Updated { count: 1 }, FileOutcome::NoMatch]);
        assert_eq!(r.updated(), 1);
        assert_eq!(r.total(), 2);
        assert_eq!(r.failed(), 1);
        assert_eq!(r.errors(), 0);
        assert_eq!(r.exit_code(), 1);
    }

    #[test]
    fn test_unmatched_excluded_when_lenient() {
        let r = report(false, vec![FileOutcome::Updated { count: 1 }, FileOutcome::NoMatch]);
        assert_eq!(r.total(), 1);
        assert!(r.is_success());
    }

    #[test]
    fn test_lenient_all_unmatched_succeeds() {
        let r = report(false, vec![FileOutcome::NoMatch, FileOutcome::NoMatch]);
        assert_eq!(r.total(), 0);
        assert!(r.is_success());
    }

    #[test]
    fn test_errors_always_fail() {
        let r = report(
            false,
            vec![
                FileOutcome::Updated { count: 1 },
                FileOutcome::Io("denied".into()),
                FileOutcome::VerificationFailed { expected: 1, actual: 2 },
            ],
        );
        assert_eq!(r.failed(), 2);
        assert_eq!(r.errors(), 2);
        assert_eq!(r.exit_code(), 1);
    }
}
