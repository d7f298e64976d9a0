//! File processing module
//!
//! This module contains the per-file stage of the pipeline: reading an input
//! file line by line, running every line through the transformer, and writing
//! the survivors to the mirrored output file.

mod core;
mod lines;

pub use core::{FileStats, Processor};
pub use lines::read_raw_line;
