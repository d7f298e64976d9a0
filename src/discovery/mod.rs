//! File discovery module
//!
//! This module contains components for finding the input files of a run.

mod scanner;

pub use scanner::scan_directory;
