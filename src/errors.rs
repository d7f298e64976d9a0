use glob::PatternError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// How far a failure reaches before it is contained
///
/// The orchestrator and the file processor match on this instead of on
/// individual error variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Only the current line is dropped
    ContinueLine,
    /// The current file is abandoned, the run goes on with the next one
    ContinueFile,
    /// Nothing else can be processed
    AbortRun,
}

/// Custom error type for the path slicer
#[derive(Debug)]
pub enum Error {
    /// The output path exists but is not a directory
    WrongDestinationPath { path: PathBuf },
    /// The output directory could not be created
    CantCreateDestFolder { source: io::Error, path: PathBuf },
    /// The destination of one file exists but is not a regular file
    CantCreateDestFile { path: PathBuf },
    /// The destination of one file exists and overwriting is disabled
    OutputFileAlreadyExists { path: PathBuf },
    /// The transformer declined to produce output for a line
    SkipLine { reason: String },
    /// The transformer failed on a line for an unexpected reason
    Transform { line: String, detail: String },
    /// A line could not be decoded as UTF-8
    InvalidLine {
        source: std::str::Utf8Error,
        line_number: usize,
    },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// The file mask is not a valid glob pattern
    InvalidMask { source: PatternError, mask: String },
    /// A matched input path is not a regular file
    InputNotAFile { path: PathBuf },
    /// The destination would overwrite the input it is produced from
    SameSourceAndDestination { path: PathBuf },
    /// Error when a path has no usable file name
    InvalidFilename { path: PathBuf },
}

impl Error {
    /// Classifies the error for the caller deciding what to skip
    pub fn severity(&self) -> Severity {
        match self {
            Error::SkipLine { .. } | Error::Transform { .. } | Error::InvalidLine { .. } => {
                Severity::ContinueLine
            }
            Error::WrongDestinationPath { .. }
            | Error::CantCreateDestFolder { .. }
            | Error::InvalidMask { .. } => Severity::AbortRun,
            Error::CantCreateDestFile { .. }
            | Error::OutputFileAlreadyExists { .. }
            | Error::FileOperation { .. }
            | Error::InputNotAFile { .. }
            | Error::SameSourceAndDestination { .. }
            | Error::InvalidFilename { .. } => Severity::ContinueFile,
        }
    }

    /// True for the expected "no output for this line" signal
    pub fn is_skip(&self) -> bool {
        matches!(self, Error::SkipLine { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WrongDestinationPath { path } => {
                write!(f, "Result path is not a directory: {}", path.display())
            }
            Error::CantCreateDestFolder { path, .. } => {
                write!(f, "Can't create result folder {}", path.display())
            }
            Error::CantCreateDestFile { path } => write!(
                f,
                "Output path {} exists and is not a file. Can't overwrite it.",
                path.display()
            ),
            Error::OutputFileAlreadyExists { path } => write!(
                f,
                "Output file {} already exists. Remove it or turn overwrite mode on.",
                path.display()
            ),
            Error::SkipLine { reason } => write!(f, "{reason}"),
            Error::Transform { line, detail } => {
                write!(f, "Failed to transform line {line:?}: {detail}")
            }
            Error::InvalidLine { line_number, .. } => {
                write!(f, "Line {line_number} is not valid UTF-8")
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::InvalidMask { mask, .. } => write!(f, "Invalid file mask: {mask}"),
            Error::InputNotAFile { path } => {
                write!(f, "Input path is not a file: {}", path.display())
            }
            Error::SameSourceAndDestination { path } => write!(
                f,
                "Output file {} is the input file itself",
                path.display()
            ),
            Error::InvalidFilename { path } => {
                write!(f, "Path has no usable file name: {}", path.display())
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::CantCreateDestFolder { source, .. } => Some(source),
            Error::InvalidLine { source, .. } => Some(source),
            Error::FileOperation { source, .. } => Some(source),
            Error::InvalidMask { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Custom Result type for the path slicer
///
/// # Examples
/// ```
/// use path_slicer::prelude::{Result, skip_line};
///
/// fn keep_short(line: &str) -> Result<&str> {
///     if line.len() > 10 {
///         return Err(skip_line("too long"));
///     }
///     Ok(line)
/// }
///
/// assert!(keep_short("short").is_ok());
/// assert!(keep_short("way too long for this").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Renders an error together with every error in its source chain
pub fn describe_chain(err: &(dyn StdError + 'static)) -> String {
    let mut description = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        current = cause.source();
    }
    description
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid mask error
pub fn mask_error(err: PatternError, mask: &str) -> Error {
    Error::InvalidMask {
        source: err,
        mask: mask.to_string(),
    }
}

/// Helper function to create the skip-line signal
pub fn skip_line(reason: &str) -> Error {
    Error::SkipLine {
        reason: reason.to_string(),
    }
}

/// Helper function to create an unexpected transformation error
pub fn transform_error(line: &str, detail: &str) -> Error {
    Error::Transform {
        line: line.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}
