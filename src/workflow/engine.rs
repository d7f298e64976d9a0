//! Workflow engine
//!
//! This module contains the engine that orchestrates the workflow steps.

use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::constants::{DEFAULT_FILE_MASK, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::discovery::scan_directory;
use crate::errors::{describe_chain, Error, Result, Severity};
use crate::file_ops::ensure_output_dir;
use crate::processor::{FileStats, Processor};
use crate::transformer::{ChannelLinkExtractor, LineTransformer};

use super::context::{FileFailure, RunContext};

/// Options for processing files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingOptions {
    /// Directory scanned for input files
    pub input_path: PathBuf,
    /// Directory receiving the output files
    pub output_path: PathBuf,
    /// Glob mask selecting the input files
    pub file_mask: String,
    /// Whether existing output files may be replaced
    pub overwrite: bool,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        ProcessingOptions {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            file_mask: DEFAULT_FILE_MASK.to_string(),
            overwrite: true,
        }
    }
}

/// Processes files with the channel link extractor
///
/// See [`process_files_with`].
pub fn process_files(options: &ProcessingOptions) -> Result<RunContext> {
    process_files_with(options, &ChannelLinkExtractor::new())
}

/// Processes files based on the options
///
/// This function orchestrates the workflow steps:
/// 1. Make sure the output directory exists
/// 2. List the input files matching the mask
/// 3. Transform every input file into its mirrored output file
///
/// A file that fails is logged, recorded in the returned context, and the
/// next file is processed.
///
/// # Arguments
/// * `options` - Options for processing files
/// * `transformer` - The per-line strategy
///
/// # Returns
/// * `Result<RunContext>` - The run statistics and per-file failures
///
/// # Errors
/// Returns an error if the output directory is unusable or the input files
/// cannot be listed. No input file has been touched in that case.
pub fn process_files_with(
    options: &ProcessingOptions,
    transformer: &dyn LineTransformer,
) -> Result<RunContext> {
    let mut context = RunContext::new();

    // Step 1: Prepare the output directory
    ensure_output_dir(&options.output_path)?;

    // Step 2: Get the list of input files
    let files = scan_directory(&options.input_path, &options.file_mask)?;
    context.set_files_found(files.len());

    if files.is_empty() {
        info!(
            "No input files found in {} by mask {:?}",
            options.input_path.display(),
            options.file_mask
        );
        return Ok(context);
    }

    info!(
        "Processing {} files into {}...",
        files.len(),
        options.output_path.display()
    );

    // Step 3: Process each file
    for file in files {
        match process_one_file(&file, options, transformer) {
            Ok(stats) => context.record_processed(stats),
            Err(e) => {
                report_file_error(&file, &e);
                context.record_failure(FileFailure {
                    path: file,
                    message: describe_chain(&e),
                    severity: e.severity(),
                });
            }
        }
    }

    info!(
        "Finished processing {} files: {} lines written, {} skipped",
        context.stats.files_processed, context.stats.lines_written, context.stats.lines_skipped
    );
    if context.has_failures() {
        warn!("{} files were skipped because of errors", context.stats.files_failed);
    }
    if context.stats.lines_failed > 0 {
        warn!(
            "{} lines were dropped because of unexpected errors",
            context.stats.lines_failed
        );
    }

    Ok(context)
}

fn process_one_file(
    file: &Path,
    options: &ProcessingOptions,
    transformer: &dyn LineTransformer,
) -> Result<FileStats> {
    let processor = Processor::prepare(file, &options.output_path, options.overwrite)?;
    processor.run(transformer)
}

fn report_file_error(file: &Path, e: &Error) {
    match e.severity() {
        Severity::ContinueFile => {
            error!("Error while processing file {}. SKIP by {}", file.display(), e);
            debug!("Cause: {}", describe_chain(e));
        }
        // Only the file is skipped, whatever the error claims
        Severity::AbortRun | Severity::ContinueLine => {
            error!(
                "Unexpected error while processing file {}. SKIP by {} ({:?})",
                file.display(),
                describe_chain(e),
                e
            );
        }
    }
}
