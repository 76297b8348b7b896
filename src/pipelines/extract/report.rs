//! Extraction run report.
use std::fmt;
use std::path::PathBuf;

use log::{error, info, warn};

use crate::segment::LengthMismatch;

/// A translation that could only be partially aligned with its root text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentWarning {
    pub title: String,
    pub language: String,
    pub mismatch: LengthMismatch,
}

impl fmt::Display for AlignmentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} [{}]: {}", self.title, self.language, self.mismatch)
    }
}

/// A title that could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFailure {
    pub title: String,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ExtractReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<TitleFailure>,
    pub warnings: Vec<AlignmentWarning>,
}

impl ExtractReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Log a summary of the run, listing every failed title.
    pub fn log_summary(&self) {
        info!(
            "{} titles written, {} failed, {} partial alignments",
            self.written.len(),
            self.failures.len(),
            self.warnings.len()
        );
        for warning in &self.warnings {
            warn!("partial alignment: {}", warning);
        }
        for failure in &self.failures {
            error!("failed title {:?}: {}", failure.title, failure.reason);
        }
    }
}
