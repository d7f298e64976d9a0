//! Workflow context
//!
//! This module defines the report a run builds up while files are processed.

use std::path::PathBuf;

use crate::errors::Severity;
use crate::processor::FileStats;

/// A file that could not be processed
#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    /// The input file
    pub path: PathBuf,
    /// The rendered error
    pub message: String,
    /// How far the error reached
    pub severity: Severity,
}

/// Statistics about the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of paths matched by the mask
    pub files_found: usize,
    /// Number of files fully processed
    pub files_processed: usize,
    /// Number of files skipped because of an error
    pub files_failed: usize,
    /// Number of lines read over all files
    pub lines_read: usize,
    /// Number of lines written over all files
    pub lines_written: usize,
    /// Number of lines the transformer declined
    pub lines_skipped: usize,
    /// Number of lines dropped because of an unexpected failure
    pub lines_failed: usize,
}

/// Context for the workflow
///
/// Passed explicitly through the run; it is the only place outcomes are
/// collected, next to what is logged.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Statistics about the processing
    pub stats: RunStats,
    /// Files that were skipped, in processing order
    pub failures: Vec<FileFailure>,
}

impl RunContext {
    /// Creates an empty context
    pub fn new() -> Self {
        RunContext::default()
    }

    /// Records how many paths the enumerator returned
    pub fn set_files_found(&mut self, count: usize) {
        self.stats.files_found = count;
    }

    /// Adds the counters of a completed file
    pub fn record_processed(&mut self, file: FileStats) {
        self.stats.files_processed += 1;
        self.stats.lines_read += file.lines_read;
        self.stats.lines_written += file.lines_written;
        self.stats.lines_skipped += file.lines_skipped;
        self.stats.lines_failed += file.lines_failed;
    }

    /// Records a file that was skipped
    pub fn record_failure(&mut self, failure: FileFailure) {
        self.stats.files_failed += 1;
        self.failures.push(failure);
    }

    /// True when at least one file was skipped
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_processed_accumulates() {
        let mut context = RunContext::new();
        context.record_processed(FileStats {
            lines_read: 3,
            lines_written: 1,
            lines_skipped: 2,
            lines_failed: 0,
        });
        context.record_processed(FileStats {
            lines_read: 2,
            lines_written: 1,
            lines_skipped: 0,
            lines_failed: 1,
        });

        assert_eq!(context.stats.files_processed, 2);
        assert_eq!(context.stats.lines_read, 5);
        assert_eq!(context.stats.lines_written, 2);
        assert_eq!(context.stats.lines_skipped, 2);
        assert_eq!(context.stats.lines_failed, 1);
        assert!(!context.has_failures());
    }

    #[test]
    fn test_record_failure() {
        let mut context = RunContext::new();
        context.record_failure(FileFailure {
            path: PathBuf::from("a.txt"),
            message: "Output file result/a.txt already exists".to_string(),
            severity: Severity::ContinueFile,
        });

        assert_eq!(context.stats.files_failed, 1);
        assert!(context.has_failures());
        assert_eq!(context.failures[0].path, PathBuf::from("a.txt"));
    }
}
