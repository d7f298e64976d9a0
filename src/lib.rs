//! Batch extraction of path segments from text files
//!
//! Every file in an input directory matching a glob mask is read line by
//! line, each line goes through a [`LineTransformer`], and the lines it keeps
//! are written to a same-named file in the output directory.
//!
//! ```no_run
//! use path_slicer::prelude::*;
//!
//! let context = process_files(&ProcessingOptions::default())?;
//! println!("{} lines written", context.stats.lines_written);
//! # Ok::<(), path_slicer::Error>(())
//! ```

pub use cli::*;
pub use errors::*;
pub use transformer::{ChannelLinkExtractor, LineTransformer};
pub use workflow::{
    process_files, process_files_with, FileFailure, ProcessingOptions, RunContext, RunStats,
};

pub mod cli;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod processor;
pub mod transformer;
pub mod workflow;

pub mod prelude {
    pub use crate::errors::{
        describe_chain, file_operation_error, invalid_filename_error, mask_error, skip_line,
        transform_error,
    };
    pub use crate::errors::{Error, Result, Severity};
    pub use crate::logging::{build_dispatch, init_logger, LogLevel};
    pub use crate::transformer::{ChannelLinkExtractor, LineTransformer};
    pub use crate::workflow::{process_files, process_files_with, ProcessingOptions, RunContext};
}
