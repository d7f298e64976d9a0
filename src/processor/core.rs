//! Core processor functionality
//!
//! This module contains the Processor struct, which turns one input file into
//! its mirrored output file.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::errors::{describe_chain, file_operation_error, Error, Result};
use crate::file_ops::resolve_destination;
use crate::transformer::LineTransformer;

use super::lines::read_raw_line;

/// Line counters for one processed file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    /// Number of lines read from the input
    pub lines_read: usize,
    /// Number of lines written to the output
    pub lines_written: usize,
    /// Number of lines the transformer declined
    pub lines_skipped: usize,
    /// Number of lines dropped because of an unexpected failure
    pub lines_failed: usize,
}

/// Handles the transformation of a single input file
///
/// A Processor only exists once its destination has been checked, so
/// running it writes to a path that is allowed to be (over)written.
#[derive(Debug, Clone)]
pub struct Processor {
    /// The input file
    source: PathBuf,
    /// The output file the transformed lines go to
    target: PathBuf,
}

impl Processor {
    /// Checks `source` and its destination under `output_dir`
    ///
    /// # Arguments
    /// * `source` - The input file
    /// * `output_dir` - The directory receiving the output file
    /// * `overwrite` - Whether an existing output file may be replaced
    ///
    /// # Errors
    /// * `InputNotAFile` if `source` is a directory
    /// * Any destination error from [`resolve_destination`]
    pub fn prepare(source: &Path, output_dir: &Path, overwrite: bool) -> Result<Processor> {
        if source.is_dir() {
            return Err(Error::InputNotAFile {
                path: source.to_path_buf(),
            });
        }

        let target = resolve_destination(source, output_dir, overwrite)?;
        debug!("Processing {} to {}...", source.display(), target.display());

        Ok(Processor {
            source: source.to_path_buf(),
            target,
        })
    }

    /// Gets a reference to the source path
    pub fn source(&self) -> &PathBuf {
        &self.source
    }

    /// Gets a reference to the target path
    pub fn target(&self) -> &PathBuf {
        &self.target
    }

    /// Streams every line of the source through `transformer` into the target
    ///
    /// Line-level failures never escape: a skip signal is logged at debug
    /// level, anything else at error level, and the next line is read. Both
    /// files are closed when this returns, whatever the outcome.
    ///
    /// # Errors
    /// Returns a file operation error if the source cannot be opened or read,
    /// or the target cannot be created or written.
    pub fn run(&self, transformer: &dyn LineTransformer) -> Result<FileStats> {
        let input = File::open(&self.source)
            .map_err(|e| file_operation_error(e, self.source.clone(), "open"))?;
        let output = File::create(&self.target)
            .map_err(|e| file_operation_error(e, self.target.clone(), "create"))?;

        let mut reader = BufReader::new(input);
        let mut writer = BufWriter::new(output);
        let mut stats = FileStats::default();
        let mut buf = Vec::new();

        while read_raw_line(&mut reader, &mut buf)
            .map_err(|e| file_operation_error(e, self.source.clone(), "read"))?
        {
            stats.lines_read += 1;

            match self.transform_line(transformer, &buf, stats.lines_read) {
                Ok(Some(result)) if !result.is_empty() => {
                    writer
                        .write_all(result.as_bytes())
                        .map_err(|e| file_operation_error(e, self.target.clone(), "write"))?;
                    stats.lines_written += 1;
                }
                Ok(_) => {
                    stats.lines_skipped += 1;
                }
                Err(e) if e.is_skip() => {
                    debug!(
                        "Line {:?} was skipped: {}",
                        String::from_utf8_lossy(&buf),
                        e
                    );
                    stats.lines_skipped += 1;
                }
                Err(e) => {
                    error!(
                        "Line {} of {} was skipped with unexpected error: {} ({:?})",
                        stats.lines_read,
                        self.source.display(),
                        describe_chain(&e),
                        e
                    );
                    stats.lines_failed += 1;
                }
            }
        }

        writer
            .flush()
            .map_err(|e| file_operation_error(e, self.target.clone(), "write"))?;

        debug!(
            "Finished {}: {} lines read, {} written, {} skipped, {} failed",
            self.source.display(),
            stats.lines_read,
            stats.lines_written,
            stats.lines_skipped,
            stats.lines_failed
        );

        Ok(stats)
    }

    fn transform_line(
        &self,
        transformer: &dyn LineTransformer,
        raw: &[u8],
        line_number: usize,
    ) -> Result<Option<String>> {
        let line = std::str::from_utf8(raw).map_err(|e| Error::InvalidLine {
            source: e,
            line_number,
        })?;
        transformer.transform(line)
    }
}
