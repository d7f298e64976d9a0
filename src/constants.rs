//! Constants used throughout the application
//!
//! This module centralises all constants used in the application to make
//! them easier to manage and update.

/// Directory scanned for input files when nothing else is given
pub const DEFAULT_INPUT_PATH: &str = ".";

/// Directory receiving the transformed files
pub const DEFAULT_OUTPUT_PATH: &str = "result";

/// Glob mask selecting the input files
pub const DEFAULT_FILE_MASK: &str = "*.txt";

/// Separator between the fields of a line
pub const FIELD_SEPARATOR: &str = "/";

/// Literal the extracted field has to match
pub const CHANNEL_TOKEN: &str = "channel";

/// Zero-based position of the first extracted field
pub const FIRST_FIELD_INDEX: usize = 4;

/// Number of fields taken starting at `FIRST_FIELD_INDEX`
pub const EXTRACTED_FIELDS: usize = 2;

/// Help text for the debug command-line flag
pub const DEBUG_HELP: &str = "Log everything down to debug level";

/// Help text for the no-overwrite command-line flag
pub const NO_OVERWRITE_HELP: &str = "Keep existing output files instead of overwriting them";
