//! Run accounting

use crate::types::FailureKind;
use std::collections::HashMap;
use std::path::PathBuf;

/// Counters for a single generation run
///
/// Scoped to one execution and discarded afterwards.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Assets written
    pub generated: usize,

    /// Assets skipped after a failure
    pub errors: usize,

    /// Written assets that carry a placeholder icon
    pub flagged: usize,

    /// Failures per kind
    pub failures: HashMap<FailureKind, usize>,

    /// Output directory of the run
    pub output_dir: PathBuf,
}

impl RunSummary {
    /// Create empty counters for a run writing to `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Record a written asset
    pub fn record_generated(&mut self, flagged: bool) {
        self.generated += 1;
        if flagged {
            self.flagged += 1;
        }
    }

    /// Record a skipped asset
    pub fn record_error(&mut self, kind: FailureKind) {
        self.errors += 1;
        *self.failures.entry(kind).or_insert(0) += 1;
    }

    /// Failures of one kind
    pub fn failures_of(&self, kind: FailureKind) -> usize {
        self.failures.get(&kind).copied().unwrap_or(0)
    }

    /// Assets processed
    pub fn total(&self) -> usize {
        self.generated + self.errors
    }

    /// True if any asset failed
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// One-line completion report
    pub fn summary(&self) -> String {
        let mut line = format!("Done: {} generated, {} errors", self.generated, self.errors);
        if self.flagged > 0 {
            line.push_str(&format!(" ({} with placeholder icon)", self.flagged));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_creation() {
        let summary = RunSummary::new("out");
        assert_eq!(summary.total(), 0);
        assert!(!summary.has_errors());
        assert_eq!(summary.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_record_generated() {
        let mut summary = RunSummary::new("out");
        summary.record_generated(false);
        summary.record_generated(true);

        assert_eq!(summary.generated, 2);
        assert_eq!(summary.flagged, 1);
        assert_eq!(summary.errors, 0);
    }

    #[test]
    fn test_record_error() {
        let mut summary = RunSummary::new("out");
        summary.record_error(FailureKind::Render);
        summary.record_error(FailureKind::Render);
        summary.record_error(FailureKind::Write);

        assert_eq!(summary.errors, 3);
        assert_eq!(summary.generated, 0);
        assert_eq!(summary.failures_of(FailureKind::Render), 2);
        assert_eq!(summary.failures_of(FailureKind::Write), 1);
        assert_eq!(summary.failures_of(FailureKind::Markup), 0);
        assert!(summary.has_errors());
    }

    #[test]
    fn test_summary_line() {
        let mut summary = RunSummary::new("out");
        summary.record_generated(false);
        summary.record_error(FailureKind::Render);
        assert_eq!(summary.summary(), "Done: 1 generated, 1 errors");

        summary.record_generated(true);
        assert_eq!(summary.summary(), "Done: 2 generated, 1 errors (1 with placeholder icon)");
    }
}
